// ============================================================================
// TOAST FFI - Notification surface of the host page
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = showToast)]
    pub fn show_toast(message: &str) -> Result<(), JsValue>;
}
