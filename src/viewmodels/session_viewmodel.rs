// ============================================================================
// SESSION VIEWMODEL - One-shot host frame initialization
// ============================================================================

use crate::services::FrameService;
use crate::state::AppState;

pub struct SessionViewModel {
    frame: FrameService,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            frame: FrameService::new(),
        }
    }

    /// Fetch the frame context once. Returns false if already started.
    pub fn initialize(&self, state: &AppState) -> bool {
        if !state.session.try_begin_init() {
            log::warn!("⚠️ [SESSION] initialize() already called, ignoring");
            return false;
        }

        let state = state.clone();
        let frame = self.frame.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match frame.get_context().await {
                Ok(context) => {
                    match context.user_label() {
                        Some(user) => log::info!("✅ [SESSION] Frame context loaded for {}", user),
                        None => log::info!("✅ [SESSION] Frame context loaded (no user)"),
                    }
                    state.finish_session(Some(context));
                    frame.ready();
                }
                Err(e) => {
                    // Degraded mode: render without a context
                    log::error!("❌ [SESSION] SDK loading error: {}", e);
                    state.finish_session(None);
                }
            }
        });
        true
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
