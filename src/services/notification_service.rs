// ============================================================================
// NOTIFICATION SERVICE - Toasts, fire-and-forget
// ============================================================================

use crate::services::js_bridge::js_error_message;
use crate::utils::toast_ffi;

pub fn show_notification(message: &str) {
    log::info!("🔔 [TOAST] {}", message);
    if let Err(e) = toast_ffi::show_toast(message) {
        log::warn!("⚠️ [TOAST] Toast surface unavailable: {}", js_error_message(&e));
    }
}
