// ============================================================================
// WALLET VIEWMODEL - Keep AppState in sync with the connector
// ============================================================================

use crate::services::WalletService;
use crate::state::AppState;

pub struct WalletViewModel {
    wallet: WalletService,
}

impl WalletViewModel {
    pub fn new() -> Self {
        Self {
            wallet: WalletService::new(),
        }
    }

    /// Read the current account once
    pub fn sync_account(&self, state: &AppState) {
        match self.wallet.account() {
            Ok(account) => {
                state.set_account(account);
            }
            Err(e) => log::warn!("⚠️ [WALLET] Could not read account: {}", e),
        }
    }

    /// Subscribe to account changes (registered once per page)
    pub fn start_watching(&self, state: &AppState) {
        if !state.wallet.try_begin_watch() {
            log::warn!("⚠️ [WALLET] start_watching already called, ignoring");
            return;
        }
        let state_for_events = state.clone();
        let result = self.wallet.watch_account(move |account| {
            log::info!(
                "👛 [WALLET] Account changed: {}",
                account.short_address().unwrap_or_else(|| "disconnected".to_string())
            );
            state_for_events.set_account(account);
        });
        if let Err(e) = result {
            log::error!("❌ [WALLET] Could not watch account: {:?}", e);
        }
    }

    /// Connect button: disconnect when connected, else connect the first connector
    pub fn toggle(&self, state: &AppState) {
        let connected = state.wallet.is_connected();
        let wallet = self.wallet.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if connected {
                wallet.disconnect().await
            } else {
                wallet.connect_first().await.map(|_| ())
            };
            if let Err(e) = result {
                log::error!("❌ [WALLET] {} failed: {}", if connected { "Disconnect" } else { "Connect" }, e);
            }
            // the watcher usually beats us to it, this covers bridges without events
            match wallet.account() {
                Ok(account) => {
                    state.set_account(account);
                }
                Err(e) => log::warn!("⚠️ [WALLET] Could not read account: {}", e),
            }
        });
    }
}

impl Default for WalletViewModel {
    fn default() -> Self {
        Self::new()
    }
}
