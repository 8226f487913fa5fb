// ============================================================================
// WALLET SERVICE - Account snapshot, account events, connect/disconnect
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::models::{Connector, WalletAccount};
use crate::services::js_bridge::{await_unit, js_error_message};
use crate::utils::wallet_ffi;

/// Wallet connector access - stateless
#[derive(Clone, Default)]
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    /// Current account snapshot
    pub fn account(&self) -> Result<WalletAccount, String> {
        let json = wallet_ffi::wallet_get_account()
            .map_err(|e| format!("Wallet error: {}", js_error_message(&e)))?;
        WalletAccount::from_json(&json)
    }

    pub fn connectors(&self) -> Result<Vec<Connector>, String> {
        let json = wallet_ffi::wallet_connectors()
            .map_err(|e| format!("Wallet error: {}", js_error_message(&e)))?;
        Connector::list_from_json(&json)
    }

    /// Connect with the first configured connector
    pub async fn connect_first(&self) -> Result<Connector, String> {
        let connector = first_connector(self.connectors()?)?;
        log::info!("🔌 [WALLET] Connecting with {}", connector.id);
        await_unit(wallet_ffi::wallet_connect(&connector.id))
            .await
            .map_err(|e| js_error_message(&e))?;
        Ok(connector)
    }

    pub async fn disconnect(&self) -> Result<(), String> {
        await_unit(wallet_ffi::wallet_disconnect())
            .await
            .map_err(|e| js_error_message(&e))
    }

    /// Register the account-change listener. Global listener: call once.
    pub fn watch_account<F>(&self, on_change: F) -> Result<(), JsValue>
    where
        F: Fn(WalletAccount) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |json: String| {
            match WalletAccount::from_json(&json) {
                Ok(account) => on_change(account),
                Err(e) => log::warn!("⚠️ [WALLET] Ignoring account event: {}", e),
            }
        }) as Box<dyn FnMut(String)>);
        wallet_ffi::wallet_watch_account(closure.as_ref().unchecked_ref())?;
        // Lives as long as the page
        closure.forget();
        Ok(())
    }
}

/// The app always connects with the first available connector
pub fn first_connector(connectors: Vec<Connector>) -> Result<Connector, String> {
    connectors
        .into_iter()
        .next()
        .ok_or_else(|| "No wallet connector available".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(id: &str) -> Connector {
        Connector {
            id: id.to_string(),
            name: id.to_string(),
        }
    }

    #[test]
    fn test_first_connector_wins() {
        let picked = first_connector(vec![connector("farcasterFrame"), connector("injected")]).unwrap();
        assert_eq!(picked.id, "farcasterFrame");
    }

    #[test]
    fn test_no_connector_is_an_error() {
        assert_eq!(first_connector(Vec::new()).unwrap_err(), "No wallet connector available");
    }
}
