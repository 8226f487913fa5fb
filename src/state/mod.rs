// ============================================================================
// STATE MODULE - shared Rc<RefCell> state with change notifications
// ============================================================================

pub mod session_state;
pub mod wallet_state;
pub mod weekend_state;
pub mod mint_state;
pub mod app_state;

pub use session_state::*;
pub use wallet_state::*;
pub use weekend_state::*;
pub use mint_state::*;
pub use app_state::*;
