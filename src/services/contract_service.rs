// ============================================================================
// CONTRACT SERVICE - isWeekEnd read, mint write, receipt lookup
// ============================================================================
// ONLY talks to the bridge, no UI state
// ============================================================================

use crate::config::ContractConfig;
use crate::models::contract::parse_bool_result;
use crate::models::{ContractCall, ContractError, TransactionReceipt, TxHash};
use crate::services::js_bridge::{await_string, contract_error_from_js};
use crate::utils::wallet_ffi;

#[derive(Clone)]
pub struct ContractService {
    contract: ContractConfig,
}

impl ContractService {
    pub fn new(contract: &ContractConfig) -> Self {
        Self {
            contract: contract.clone(),
        }
    }

    /// isWeekEnd(timestamp); None when the node had no answer
    pub async fn read_is_weekend(&self, timestamp: u64) -> Result<Option<bool>, ContractError> {
        let request = ContractCall::is_weekend(&self.contract, timestamp)?.to_json()?;
        let json = await_string(wallet_ffi::contract_read(&request))
            .await
            .map_err(|e| contract_error_from_js(&e))?;
        parse_bool_result(&json)
    }

    /// Submit mint(); resolves once the wallet accepted the transaction
    pub async fn write_mint(&self) -> Result<TxHash, ContractError> {
        let request = ContractCall::mint(&self.contract)?.to_json()?;
        log::info!("🪙 [CONTRACT] Sending mint() to {}", self.contract.address);
        let raw = await_string(wallet_ffi::contract_write(&request))
            .await
            .map_err(|e| contract_error_from_js(&e))?;
        TxHash::parse(&raw)
    }

    /// Receipt for `hash`, None while not mined
    pub async fn fetch_receipt(&self, hash: &TxHash) -> Result<Option<TransactionReceipt>, ContractError> {
        let json = await_string(wallet_ffi::transaction_receipt(hash.as_str()))
            .await
            .map_err(|e| contract_error_from_js(&e))?;
        TransactionReceipt::from_json(&json)
    }
}
