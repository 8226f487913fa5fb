// ============================================================================
// TRANSACTION - Mint transaction record and receipts
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::contract::ContractError;

/// 0x-prefixed transaction hash returned by the wallet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    pub fn parse(raw: &str) -> Result<Self, ContractError> {
        let raw = raw.trim().trim_matches('"');
        let valid = raw
            .strip_prefix("0x")
            .map(|hex| hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);
        if valid {
            Ok(Self(raw.to_lowercase()))
        } else {
            Err(ContractError::new(format!("Invalid transaction hash: {}", raw)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub status: ReceiptStatus,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TransactionReceipt {
    /// "null" means the transaction is not mined yet
    pub fn from_json(json: &str) -> Result<Option<Self>, ContractError> {
        serde_json::from_str(json).map_err(|e| ContractError::new(format!("Parse error: {}", e)))
    }
}

/// Where the receipt watcher is for the current hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiptPhase {
    /// No hash to watch
    #[default]
    Idle,
    Confirming,
    Confirmed,
    Failed,
}

impl ReceiptPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, ReceiptPhase::Confirmed | ReceiptPhase::Failed)
    }
}

/// The single mint transaction the UI tracks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MintTransaction {
    pub hash: Option<TxHash>,
    pub is_pending: bool,
    pub error: Option<ContractError>,
    pub receipt: ReceiptPhase,
}

impl MintTransaction {
    /// Fresh record for a new submission
    pub fn submitting() -> Self {
        Self {
            is_pending: true,
            ..Self::default()
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.receipt == ReceiptPhase::Confirming
    }

    pub fn is_confirmed(&self) -> bool {
        self.receipt == ReceiptPhase::Confirmed
    }

    /// Pending in the wallet or waiting for the receipt
    pub fn is_busy(&self) -> bool {
        self.is_pending || self.is_confirming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x8f1a6b0c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a";

    #[test]
    fn test_hash_parse_accepts_quoted_and_uppercase() {
        let hash = TxHash::parse(&format!("\"{}\"", HASH.to_uppercase().replace("0X", "0x"))).unwrap();
        assert_eq!(hash.as_str(), HASH);
    }

    #[test]
    fn test_hash_parse_rejects_short_values() {
        assert!(TxHash::parse("0x1234").is_err());
        assert!(TxHash::parse(&HASH[2..]).is_err());
    }

    #[test]
    fn test_receipt_json() {
        let receipt = TransactionReceipt::from_json(r#"{"status": "success", "blockNumber": "21000000"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(receipt.status, ReceiptStatus::Success);
        assert_eq!(TransactionReceipt::from_json("null").unwrap(), None);
        let reverted = TransactionReceipt::from_json(r#"{"status": "reverted"}"#).unwrap().unwrap();
        assert_eq!(reverted.status, ReceiptStatus::Reverted);
    }

    #[test]
    fn test_idle_transaction_is_not_confirming_or_confirmed() {
        let tx = MintTransaction::default();
        assert!(!tx.is_confirming());
        assert!(!tx.is_confirmed());
        assert!(!tx.is_busy());
    }

    #[test]
    fn test_busy_while_pending_or_confirming() {
        assert!(MintTransaction::submitting().is_busy());
        let confirming = MintTransaction {
            receipt: ReceiptPhase::Confirming,
            ..MintTransaction::default()
        };
        assert!(confirming.is_busy());
        assert!(ReceiptPhase::Failed.is_terminal());
        assert!(!ReceiptPhase::Confirming.is_terminal());
    }
}
