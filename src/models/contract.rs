// ============================================================================
// CONTRACT - Weekend NFT contract calls and errors
// ============================================================================
// Only the two functions the app uses are described. ABI encoding happens
// on the bridge side; we hand it the request as JSON.
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::config::ContractConfig;

/// Minimal ABI: isWeekEnd(uint256) -> bool, mint()
pub const WEEKEND_ABI: &str = r#"[
  {"type":"function","name":"isWeekEnd","stateMutability":"view","inputs":[{"name":"timestamp","type":"uint256"}],"outputs":[{"name":"","type":"bool"}]},
  {"type":"function","name":"mint","stateMutability":"nonpayable","inputs":[],"outputs":[]}
]"#;

pub const FN_IS_WEEKEND: &str = "isWeekEnd";
pub const FN_MINT: &str = "mint";

/// Read or write request as understood by the contract bridge
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub address: String,
    pub chain_id: u64,
    pub abi: Value,
    pub function_name: String,
    /// uint256 values travel as decimal strings
    pub args: Vec<Value>,
}

impl ContractCall {
    fn new(contract: &ContractConfig, function_name: &str, args: Vec<Value>) -> Result<Self, ContractError> {
        let abi = serde_json::from_str(WEEKEND_ABI)
            .map_err(|e| ContractError::new(format!("Invalid ABI: {}", e)))?;
        Ok(Self {
            address: contract.address.clone(),
            chain_id: contract.chain_id,
            abi,
            function_name: function_name.to_string(),
            args,
        })
    }

    /// isWeekEnd(timestamp)
    pub fn is_weekend(contract: &ContractConfig, timestamp: u64) -> Result<Self, ContractError> {
        Self::new(contract, FN_IS_WEEKEND, vec![Value::String(timestamp.to_string())])
    }

    /// mint(), no arguments
    pub fn mint(contract: &ContractConfig) -> Result<Self, ContractError> {
        Self::new(contract, FN_MINT, Vec::new())
    }

    pub fn to_json(&self) -> Result<String, ContractError> {
        serde_json::to_string(self).map_err(|e| ContractError::new(format!("Serialization error: {}", e)))
    }
}

/// Error surfaced by the wallet/contract layer
#[derive(Debug, Clone, PartialEq)]
pub struct ContractError {
    pub short_message: Option<String>,
    pub message: String,
}

impl ContractError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            short_message: None,
            message: message.into(),
        }
    }

    pub fn with_short_message(message: impl Into<String>, short_message: impl Into<String>) -> Self {
        Self {
            short_message: Some(short_message.into()),
            message: message.into(),
        }
    }

    /// Text shown to the user: the library's short message when it has one
    pub fn display_message(&self) -> &str {
        match self.short_message.as_deref() {
            Some(short) if !short.trim().is_empty() => short,
            _ => &self.message,
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for ContractError {}

/// Interpret the JSON value returned by isWeekEnd
pub fn parse_bool_result(json: &str) -> Result<Option<bool>, ContractError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ContractError::new(format!("Parse error: {}", e)))?;
    match value {
        Value::Bool(b) => Ok(Some(b)),
        Value::Null => Ok(None),
        other => Err(ContractError::new(format!("Unexpected isWeekEnd result: {}", other))),
    }
}
