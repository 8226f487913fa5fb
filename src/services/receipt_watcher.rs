// ============================================================================
// RECEIPT WATCHER - Poll a transaction until it is confirmed or failed
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use crate::config::ReceiptConfig;
use crate::models::{ContractError, ReceiptPhase, ReceiptStatus, TransactionReceipt, TxHash};
use crate::services::ContractService;

/// Phase after the `polls_done`-th poll returned `result`
pub fn phase_after_poll(
    result: &Result<Option<TransactionReceipt>, ContractError>,
    polls_done: u32,
    max_polls: u32,
) -> ReceiptPhase {
    match result {
        Ok(Some(receipt)) => match receipt.status {
            ReceiptStatus::Success => ReceiptPhase::Confirmed,
            ReceiptStatus::Reverted => ReceiptPhase::Failed,
        },
        // not mined yet, or a transient RPC error
        Ok(None) | Err(_) if polls_done >= max_polls => ReceiptPhase::Failed,
        Ok(None) | Err(_) => ReceiptPhase::Confirming,
    }
}

pub struct ReceiptWatcher {
    contract: ContractService,
    poll_interval_ms: u32,
    max_polls: u32,
}

impl ReceiptWatcher {
    pub fn new(contract: ContractService, config: &ReceiptConfig) -> Self {
        Self {
            contract,
            poll_interval_ms: config.poll_interval_ms.max(1),
            max_polls: config.max_polls.max(1),
        }
    }

    /// Poll until a terminal phase; `on_phase` sees Confirming first, then
    /// the terminal phase.
    pub async fn watch<F>(&self, hash: TxHash, on_phase: F) -> ReceiptPhase
    where
        F: Fn(ReceiptPhase),
    {
        on_phase(ReceiptPhase::Confirming);
        let mut polls_done = 0;
        loop {
            let result = self.contract.fetch_receipt(&hash).await;
            polls_done += 1;
            if let Err(e) = &result {
                log::warn!("⚠️ [RECEIPT] Poll {} for {} failed: {}", polls_done, hash, e.message);
            }

            let phase = phase_after_poll(&result, polls_done, self.max_polls);
            if phase.is_terminal() {
                match phase {
                    ReceiptPhase::Confirmed => log::info!("✅ [RECEIPT] {} confirmed after {} polls", hash, polls_done),
                    _ => log::warn!("⚠️ [RECEIPT] {} did not confirm ({} polls)", hash, polls_done),
                }
                on_phase(phase);
                return phase;
            }
            TimeoutFuture::new(self.poll_interval_ms).await;
        }
    }
}
