pub mod js_bridge;
pub mod frame_service;
pub mod wallet_service;
pub mod contract_service;
pub mod receipt_watcher;
pub mod image_preloader;
pub mod notification_service;

pub use frame_service::*;
pub use wallet_service::*;
pub use contract_service::*;
pub use receipt_watcher::*;
pub use image_preloader::*;
pub use notification_service::*;
