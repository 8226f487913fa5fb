// ============================================================================
// APP STATE - Global application state
// ============================================================================
// Single writer: only the root app (through the view models) mutates it.
// Every effective change bumps the revision and notifies the subscribers,
// no-op updates notify nobody.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::{ContractError, FrameContext, ReceiptPhase, TxHash, WalletAccount};
use crate::state::{MintState, SessionState, WalletState, WeekendState};
use crate::viewmodels::AppSnapshot;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    config: Rc<AppConfig>,
    pub session: SessionState,
    pub wallet: WalletState,
    pub weekend: WeekendState,
    pub mint: MintState,

    images_preloaded: Rc<Cell<bool>>,

    revision: Rc<Cell<u64>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Rc::new(config),
            session: SessionState::new(),
            wallet: WalletState::new(),
            weekend: WeekendState::new(),
            mint: MintState::new(),
            images_preloaded: Rc::new(Cell::new(false)),
            revision: Rc::new(Cell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Subscribe to state changes
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Number of effective state changes so far
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    fn notify_subscribers(&self) {
        self.revision.set(self.revision.get() + 1);
        // Copy first so a callback may subscribe without a double borrow
        let callbacks: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }

    /// Session initializer finished (successfully or not)
    pub fn finish_session(&self, context: Option<FrameContext>) -> bool {
        let changed = self.session.set_ready(context);
        if changed {
            self.notify_subscribers();
        }
        changed
    }

    pub fn set_account(&self, account: WalletAccount) -> bool {
        let changed = self.wallet.set_account(account);
        if changed {
            self.notify_subscribers();
        }
        changed
    }

    /// Store the isWeekEnd result; same value twice is a no-op
    pub fn set_weekend(&self, is_weekend: bool) -> bool {
        let changed = self.weekend.set_is_weekend(is_weekend);
        if changed {
            self.notify_subscribers();
        }
        changed
    }

    pub fn begin_mint(&self) {
        self.mint.begin();
        self.notify_subscribers();
    }

    pub fn mint_accepted(&self, hash: TxHash) {
        self.mint.accepted(hash);
        self.notify_subscribers();
    }

    pub fn mint_failed(&self, error: ContractError) {
        self.mint.failed(error);
        self.notify_subscribers();
    }

    /// Apply a receipt watcher update. Returns true only when this update is
    /// the one that flipped `minted`.
    pub fn receipt_update(&self, hash: &TxHash, phase: ReceiptPhase) -> bool {
        if !self.mint.set_receipt_phase(hash, phase) {
            return false;
        }
        let newly_minted = self.mint.transaction().is_confirmed() && self.mint.mark_minted();
        self.notify_subscribers();
        newly_minted
    }

    /// Claim the once-per-mount image preload
    pub fn try_begin_preload(&self) -> bool {
        !self.images_preloaded.replace(true)
    }

    /// Plain-data copy of everything the screen depends on
    pub fn snapshot(&self) -> AppSnapshot {
        let account = self.wallet.account();
        let tx = self.mint.transaction();
        AppSnapshot {
            sdk_loaded: self.session.is_loaded(),
            address: account.address().map(str::to_string),
            is_connected: account.is_connected,
            is_weekend: self.weekend.is_weekend(),
            minted: self.mint.minted(),
            mint_pending: tx.is_pending,
            mint_confirming: tx.is_confirming(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x8f1a6b0c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a";
    const OTHER: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

    fn counting_state() -> (AppState, Rc<Cell<u32>>) {
        let state = AppState::new(AppConfig::default());
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));
        (state, renders)
    }

    #[test]
    fn test_weekend_update_is_idempotent() {
        let (state, renders) = counting_state();
        assert!(!state.set_weekend(false));
        assert_eq!(renders.get(), 0);
        assert!(state.set_weekend(true));
        assert!(!state.set_weekend(true));
        assert_eq!(renders.get(), 1);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn test_session_finishes_once() {
        let (state, renders) = counting_state();
        assert!(state.finish_session(None));
        assert!(!state.finish_session(Some(FrameContext::default())));
        assert_eq!(renders.get(), 1);
        assert!(state.snapshot().sdk_loaded);
    }

    #[test]
    fn test_unchanged_account_does_not_notify() {
        let (state, renders) = counting_state();
        let account = WalletAccount {
            address: Some("0xabc".to_string()),
            is_connected: true,
            chain_id: Some(8453),
        };
        assert!(state.set_account(account.clone()));
        assert!(!state.set_account(account));
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn test_confirmation_flips_minted_exactly_once() {
        let (state, _) = counting_state();
        let hash = TxHash::parse(HASH).unwrap();
        state.begin_mint();
        assert!(state.snapshot().mint_pending);

        state.mint_accepted(hash.clone());
        let snap = state.snapshot();
        assert!(!snap.mint_pending);
        assert!(snap.mint_confirming);

        assert!(state.receipt_update(&hash, ReceiptPhase::Confirmed));
        assert!(!state.receipt_update(&hash, ReceiptPhase::Confirmed));
        assert!(state.snapshot().minted);
    }

    #[test]
    fn test_minted_survives_weekend_changes_and_new_mints() {
        let (state, _) = counting_state();
        let hash = TxHash::parse(HASH).unwrap();
        state.set_weekend(true);
        state.begin_mint();
        state.mint_accepted(hash.clone());
        state.receipt_update(&hash, ReceiptPhase::Confirmed);

        state.set_weekend(false);
        state.begin_mint();
        state.mint_failed(ContractError::new("rejected"));
        assert!(state.snapshot().minted);

        let second = TxHash::parse(OTHER).unwrap();
        state.begin_mint();
        state.mint_accepted(second.clone());
        // a second confirmation never reports a new mint
        assert!(!state.receipt_update(&second, ReceiptPhase::Confirmed));
        assert!(state.snapshot().minted);
    }

    #[test]
    fn test_receipt_for_stale_hash_is_ignored() {
        let (state, renders) = counting_state();
        let first = TxHash::parse(HASH).unwrap();
        let second = TxHash::parse(OTHER).unwrap();
        state.begin_mint();
        state.mint_accepted(second);
        let before = renders.get();
        assert!(!state.receipt_update(&first, ReceiptPhase::Confirmed));
        assert_eq!(renders.get(), before);
        assert!(!state.snapshot().minted);
    }

    #[test]
    fn test_only_a_confirmed_receipt_marks_minted() {
        let (state, _) = counting_state();
        let hash = TxHash::parse(HASH).unwrap();
        state.begin_mint();
        state.mint_accepted(hash.clone());
        // Confirming is already the phase after acceptance
        assert!(!state.receipt_update(&hash, ReceiptPhase::Confirming));
        assert!(!state.receipt_update(&hash, ReceiptPhase::Failed));
        assert!(!state.snapshot().minted);
        assert!(!state.mint.transaction().is_confirmed());
    }

    #[test]
    fn test_failed_receipt_releases_the_button() {
        let (state, _) = counting_state();
        let hash = TxHash::parse(HASH).unwrap();
        state.begin_mint();
        state.mint_accepted(hash.clone());
        assert!(!state.receipt_update(&hash, ReceiptPhase::Failed));
        let snap = state.snapshot();
        assert!(!snap.mint_confirming);
        assert!(!snap.minted);
    }

    #[test]
    fn test_mint_error_is_kept_on_the_record() {
        let (state, _) = counting_state();
        state.begin_mint();
        state.mint_failed(ContractError::with_short_message("long", "short"));
        let tx = state.mint.transaction();
        assert!(!tx.is_pending);
        assert_eq!(tx.error.map(|e| e.display_message().to_string()).as_deref(), Some("short"));
    }

    #[test]
    fn test_preload_claimed_once() {
        let state = AppState::new(AppConfig::default());
        assert!(state.try_begin_preload());
        assert!(!state.clone().try_begin_preload());
    }
}
