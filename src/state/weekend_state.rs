// ============================================================================
// WEEKEND STATE - Result of the isWeekEnd contract read
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct WeekendState {
    is_weekend: Rc<RefCell<bool>>,
    refresh_started: Rc<Cell<bool>>,
}

impl WeekendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: returns `false` and leaves state alone for the same value
    pub fn set_is_weekend(&self, value: bool) -> bool {
        let mut current = self.is_weekend.borrow_mut();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }

    pub fn is_weekend(&self) -> bool {
        *self.is_weekend.borrow()
    }

    pub fn try_begin_refresh(&self) -> bool {
        !self.refresh_started.replace(true)
    }
}
