// ============================================================================
// MINT STATE - Current mint transaction + session-long minted flag
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{ContractError, MintTransaction, ReceiptPhase, TxHash};

#[derive(Clone, Default)]
pub struct MintState {
    transaction: Rc<RefCell<MintTransaction>>,
    minted: Rc<RefCell<bool>>,
}

impl MintState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction(&self) -> MintTransaction {
        self.transaction.borrow().clone()
    }

    /// Reset the record for a new submission (pending, no hash, no error)
    pub fn begin(&self) {
        *self.transaction.borrow_mut() = MintTransaction::submitting();
    }

    /// Wallet accepted the request
    pub fn accepted(&self, hash: TxHash) {
        let mut tx = self.transaction.borrow_mut();
        tx.is_pending = false;
        tx.hash = Some(hash);
        tx.receipt = ReceiptPhase::Confirming;
    }

    pub fn failed(&self, error: ContractError) {
        let mut tx = self.transaction.borrow_mut();
        tx.is_pending = false;
        tx.error = Some(error);
    }

    /// Update the receipt phase for `hash`; stale hashes are ignored.
    /// Returns true when the phase actually changed.
    pub fn set_receipt_phase(&self, hash: &TxHash, phase: ReceiptPhase) -> bool {
        let mut tx = self.transaction.borrow_mut();
        if tx.hash.as_ref() != Some(hash) || tx.receipt == phase {
            return false;
        }
        tx.receipt = phase;
        true
    }

    /// Flip the minted flag. Only the first call returns `true`.
    pub fn mark_minted(&self) -> bool {
        let mut minted = self.minted.borrow_mut();
        if *minted {
            return false;
        }
        *minted = true;
        true
    }

    pub fn minted(&self) -> bool {
        *self.minted.borrow()
    }
}
