// ============================================================================
// FRAME SDK FFI - Foreign Function Interface for the host frame SDK
// ============================================================================
// Only wrappers for JS functions - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Resolves with the frame context serialized as JSON
    #[wasm_bindgen(js_name = frameGetContext)]
    pub fn frame_get_context() -> js_sys::Promise;

    /// Hide the host splash screen
    #[wasm_bindgen(catch, js_name = frameReady)]
    pub fn frame_ready() -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = frameOpenUrl)]
    pub fn frame_open_url(url: &str) -> js_sys::Promise;
}
