// ============================================================================
// WALLET STATE - Last known account from the connector
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::WalletAccount;

#[derive(Clone, Default)]
pub struct WalletState {
    account: Rc<RefCell<WalletAccount>>,
    /// Account-change listener registered
    watching: Rc<Cell<bool>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new snapshot, returns whether anything changed
    pub fn set_account(&self, account: WalletAccount) -> bool {
        let mut current = self.account.borrow_mut();
        if *current == account {
            return false;
        }
        *current = account;
        true
    }

    pub fn account(&self) -> WalletAccount {
        self.account.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.account.borrow().is_connected
    }

    pub fn try_begin_watch(&self) -> bool {
        !self.watching.replace(true)
    }
}
