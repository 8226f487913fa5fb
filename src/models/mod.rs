pub mod frame;
pub mod wallet;
pub mod contract;
pub mod transaction;

pub use frame::FrameContext;
pub use wallet::{WalletAccount, Connector};
pub use contract::{ContractCall, ContractError};
pub use transaction::{TxHash, ReceiptPhase, ReceiptStatus, TransactionReceipt, MintTransaction};
