// Shared utils

pub mod frame_ffi;
pub mod wallet_ffi;
pub mod toast_ffi;
pub mod time;

pub use time::*;
