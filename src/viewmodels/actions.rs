// ============================================================================
// ACTIONS - Route button clicks to the view models
// ============================================================================

use crate::services::FrameService;
use crate::state::AppState;
use crate::viewmodels::{Action, MintViewModel, WalletViewModel};

pub fn dispatch(state: &AppState, action: Action) {
    log::info!("👆 [ACTION] {:?}", action);
    match action {
        Action::Mint => MintViewModel::new(state).submit(state),
        Action::Share => MintViewModel::new(state).share(state),
        Action::Connect | Action::Disconnect => WalletViewModel::new().toggle(state),
        Action::OpenFooter => FrameService::new().open_url(&state.config().footer_url),
    }
}
