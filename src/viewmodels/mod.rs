pub mod screen;
pub mod session_viewmodel;
pub mod wallet_viewmodel;
pub mod weekend_viewmodel;
pub mod mint_viewmodel;
pub mod actions;

pub use screen::{build_screen, Action, AppSnapshot, ScreenModel, ViewBranch};
pub use session_viewmodel::SessionViewModel;
pub use wallet_viewmodel::WalletViewModel;
pub use weekend_viewmodel::WeekendViewModel;
pub use mint_viewmodel::MintViewModel;
pub use actions::dispatch;
