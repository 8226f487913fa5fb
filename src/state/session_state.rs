// ============================================================================
// SESSION STATE - Host frame session (loading flag + context in one value)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::FrameContext;

/// Single tagged value instead of separate loaded/context flags
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Loading,
    /// `context` is None when the host SDK failed to answer
    Ready { context: Option<FrameContext> },
}

#[derive(Clone, Default)]
pub struct SessionState {
    status: Rc<RefCell<SessionStatus>>,
    init_started: Rc<Cell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the one-shot initialization. Only the first caller gets `true`.
    pub fn try_begin_init(&self) -> bool {
        !self.init_started.replace(true)
    }

    /// Loading -> Ready. Later calls are ignored and return `false`.
    pub fn set_ready(&self, context: Option<FrameContext>) -> bool {
        let mut status = self.status.borrow_mut();
        if matches!(*status, SessionStatus::Ready { .. }) {
            return false;
        }
        *status = SessionStatus::Ready { context };
        true
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.status.borrow(), SessionStatus::Ready { .. })
    }

    #[cfg(test)]
    fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_guard_is_one_shot() {
        let session = SessionState::new();
        assert!(session.try_begin_init());
        assert!(!session.try_begin_init());
        // clones share the sentinel
        assert!(!session.clone().try_begin_init());
    }

    #[test]
    fn test_ready_transition_happens_once() {
        let session = SessionState::new();
        assert!(!session.is_loaded());
        assert!(session.set_ready(None));
        assert!(session.is_loaded());
        assert!(!session.set_ready(Some(FrameContext::default())));
        assert_eq!(session.status(), SessionStatus::Ready { context: None });
    }

    #[test]
    fn test_context_kept_after_success() {
        let session = SessionState::new();
        assert_eq!(session.status(), SessionStatus::Loading);
        session.set_ready(Some(FrameContext::default()));
        assert_eq!(
            session.status(),
            SessionStatus::Ready { context: Some(FrameContext::default()) }
        );
    }
}
