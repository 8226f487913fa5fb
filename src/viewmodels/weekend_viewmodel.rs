// ============================================================================
// WEEKEND VIEWMODEL - isWeekEnd(now) -> AppState
// ============================================================================
// The timestamp is taken once per query. With WEEKEND_REFRESH_SECONDS = 0
// that means once per page load and the status can go stale across
// midnight; a non-zero value re-queries on that interval.
// ============================================================================

use gloo_timers::callback::Interval;
use crate::services::ContractService;
use crate::state::AppState;
use crate::utils::unix_timestamp_now;

pub struct WeekendViewModel {
    contract: ContractService,
}

impl WeekendViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            contract: ContractService::new(&state.config().contract),
        }
    }

    /// Query with the current timestamp
    pub fn query(&self, state: &AppState) {
        let timestamp = unix_timestamp_now();

        let contract = self.contract.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match contract.read_is_weekend(timestamp).await {
                Ok(Some(is_weekend)) => {
                    if state.set_weekend(is_weekend) {
                        log::info!("📅 [WEEKEND] isWeekEnd({}) = {}", timestamp, is_weekend);
                    }
                }
                Ok(None) => log::warn!("⚠️ [WEEKEND] isWeekEnd({}) returned no value", timestamp),
                // keep the last known value
                Err(e) => log::warn!("⚠️ [WEEKEND] isWeekEnd({}) failed: {}", timestamp, e.message),
            }
        });
    }

    /// Periodic re-query, only if configured
    pub fn start_refresh(&self, state: &AppState) {
        let seconds = state.config().weekend_refresh_seconds;
        if seconds == 0 || !state.weekend.try_begin_refresh() {
            return;
        }
        log::info!("⏰ [WEEKEND] Re-checking every {}s", seconds);
        let state = state.clone();
        let contract = self.contract.clone();
        Interval::new(seconds.saturating_mul(1000), move || {
            WeekendViewModel { contract: contract.clone() }.query(&state);
        })
        .forget();
    }
}
