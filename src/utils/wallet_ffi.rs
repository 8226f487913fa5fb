// ============================================================================
// WALLET FFI - Foreign Function Interface for the wallet/contract bridge
// ============================================================================
// Only wrappers for JS functions - no state, no logic.
// Payloads cross the boundary as JSON strings.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `{"address": "0x..", "isConnected": true, "chainId": 8453}`
    #[wasm_bindgen(catch, js_name = walletGetAccount)]
    pub fn wallet_get_account() -> Result<String, JsValue>;

    /// Calls `on_change` with the account JSON on every change
    #[wasm_bindgen(catch, js_name = walletWatchAccount)]
    pub fn wallet_watch_account(on_change: &js_sys::Function) -> Result<(), JsValue>;

    /// `[{"id": "..", "name": ".."}]`
    #[wasm_bindgen(catch, js_name = walletConnectors)]
    pub fn wallet_connectors() -> Result<String, JsValue>;

    #[wasm_bindgen(js_name = walletConnect)]
    pub fn wallet_connect(connector_id: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = walletDisconnect)]
    pub fn wallet_disconnect() -> js_sys::Promise;

    /// Resolves with the function result as JSON
    #[wasm_bindgen(js_name = contractRead)]
    pub fn contract_read(request_json: &str) -> js_sys::Promise;

    /// Resolves with the transaction hash once the wallet accepted it
    #[wasm_bindgen(js_name = contractWrite)]
    pub fn contract_write(request_json: &str) -> js_sys::Promise;

    /// Resolves with the receipt JSON, or "null" while not mined
    #[wasm_bindgen(js_name = transactionReceipt)]
    pub fn transaction_receipt(hash: &str) -> js_sys::Promise;
}
