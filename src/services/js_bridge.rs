// ============================================================================
// JS BRIDGE HELPERS - Promise -> Rust, JS errors -> Rust errors
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use crate::models::ContractError;

/// Await a promise that resolves with a string (JSON payloads, hashes)
pub async fn await_string(promise: js_sys::Promise) -> Result<String, JsValue> {
    let value = JsFuture::from(promise).await?;
    value
        .as_string()
        .ok_or_else(|| JsValue::from_str("Bridge promise did not resolve with a string"))
}

/// Await a promise and ignore its value
pub async fn await_unit(promise: js_sys::Promise) -> Result<(), JsValue> {
    JsFuture::from(promise).await.map(|_| ())
}

fn string_field(value: &JsValue, field: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_string())
}

/// Human readable text of a thrown value
pub fn js_error_message(error: &JsValue) -> String {
    string_field(error, "message")
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

/// Map a rejected wallet/contract promise, keeping the library short message
pub fn contract_error_from_js(error: &JsValue) -> ContractError {
    let message = js_error_message(error);
    match string_field(error, "shortMessage") {
        Some(short) => ContractError::with_short_message(message, short),
        None => ContractError::new(message),
    }
}
