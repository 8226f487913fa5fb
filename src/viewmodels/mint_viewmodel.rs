// ============================================================================
// MINT VIEWMODEL - Submit mint(), watch the receipt, share
// ============================================================================

use crate::models::{ReceiptPhase, TxHash};
use crate::services::{show_notification, ContractService, FrameService, ReceiptWatcher};
use crate::state::AppState;

pub const MINT_SUCCESS_TOAST: &str = "Mint Success!";

pub struct MintViewModel {
    contract: ContractService,
    frame: FrameService,
}

impl MintViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            contract: ContractService::new(&state.config().contract),
            frame: FrameService::new(),
        }
    }

    /// Submit mint(). Not guarded: the view disables the button while busy.
    pub fn submit(&self, state: &AppState) {
        if state.mint.transaction().is_busy() {
            log::warn!("⚠️ [MINT] Submitting while a mint is still in flight");
        }
        state.begin_mint();

        let contract = self.contract.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match contract.write_mint().await {
                Ok(hash) => {
                    log::info!("📤 [MINT] Transaction submitted: {}", hash);
                    state.mint_accepted(hash.clone());
                    Self::watch_receipt(contract, state, hash).await;
                }
                Err(e) => {
                    log::error!("❌ [MINT] Submission failed: {}", e.message);
                    show_notification(e.display_message());
                    state.mint_failed(e);
                }
            }
        });
    }

    async fn watch_receipt(contract: ContractService, state: AppState, hash: TxHash) {
        let watcher = ReceiptWatcher::new(contract, &state.config().receipt);
        let state_for_updates = state.clone();
        let hash_for_updates = hash.clone();
        watcher
            .watch(hash, move |phase| {
                if state_for_updates.receipt_update(&hash_for_updates, phase) {
                    show_notification(MINT_SUCCESS_TOAST);
                }
                if phase == ReceiptPhase::Failed {
                    log::warn!("⚠️ [MINT] Receipt watch ended without confirmation");
                }
            })
            .await;
    }

    /// Open the pre-filled compose window
    pub fn share(&self, state: &AppState) {
        self.frame.open_url(&state.config().share_url);
    }
}
