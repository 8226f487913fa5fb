// ============================================================================
// WALLET - Account snapshot and connectors exposed by the wallet bridge
// ============================================================================

use serde::{Deserialize, Serialize};

/// Connected account as seen by the wallet connector (read-only here)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_connected: bool,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl WalletAccount {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut account: WalletAccount =
            serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))?;
        // Connectors report "" while reconnecting
        if account.address.as_deref().map(str::is_empty).unwrap_or(false) {
            account.address = None;
        }
        Ok(account)
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// 0x1234...abcd, or the full value when it cannot be cut on char boundaries
    pub fn short_address(&self) -> Option<String> {
        let addr = self.address.as_deref()?;
        if addr.len() <= 10 {
            return Some(addr.to_string());
        }
        match (addr.get(..6), addr.get(addr.len().saturating_sub(4)..)) {
            (Some(head), Some(tail)) => Some(format!("{}...{}", head, tail)),
            _ => Some(addr.to_string()),
        }
    }
}

impl Connector {
    pub fn list_from_json(json: &str) -> Result<Vec<Connector>, String> {
        serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_connected_account() {
        let account = WalletAccount::from_json(
            r#"{"address": "0xAbC0000000000000000000000000000000001234", "isConnected": true, "chainId": 8453}"#,
        )
        .unwrap();
        assert!(account.is_connected);
        assert_eq!(account.chain_id, Some(8453));
        assert_eq!(account.short_address().as_deref(), Some("0xAbC0...1234"));
    }

    #[test]
    fn test_disconnected_account_has_no_address() {
        let account = WalletAccount::from_json(r#"{"isConnected": false}"#).unwrap();
        assert_eq!(account, WalletAccount::default());
        assert_eq!(account.address(), None);
    }

    #[test]
    fn test_empty_address_is_treated_as_missing() {
        let account = WalletAccount::from_json(r#"{"address": "", "isConnected": false}"#).unwrap();
        assert_eq!(account.address(), None);
    }

    #[test]
    fn test_short_address_with_multibyte_characters_does_not_panic() {
        let account = WalletAccount::from_json(r#"{"address": "0xaaaé00000000", "isConnected": true}"#).unwrap();
        assert_eq!(account.short_address().as_deref(), Some("0xaaaé00000000"));

        let tail = WalletAccount::from_json(r#"{"address": "0xabcdef00000é000", "isConnected": true}"#).unwrap();
        assert_eq!(tail.short_address().as_deref(), Some("0xabcdef00000é000"));
    }

    #[test]
    fn test_short_address_keeps_short_values() {
        let account = WalletAccount::from_json(r#"{"address": "0xabc", "isConnected": true}"#).unwrap();
        assert_eq!(account.short_address().as_deref(), Some("0xabc"));
    }

    #[test]
    fn test_connector_list_keeps_order() {
        let connectors = Connector::list_from_json(
            r#"[{"id": "farcasterFrame", "name": "Farcaster Frame"}, {"id": "injected"}]"#,
        )
        .unwrap();
        assert_eq!(connectors[0].id, "farcasterFrame");
        assert_eq!(connectors[1].name, "");
    }
}
