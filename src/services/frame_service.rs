// ============================================================================
// FRAME SERVICE - Host frame SDK (context, ready, openUrl)
// ============================================================================

use crate::models::FrameContext;
use crate::services::js_bridge::{await_string, await_unit, js_error_message};
use crate::utils::frame_ffi;

/// Frame SDK access - stateless
#[derive(Clone, Default)]
pub struct FrameService;

impl FrameService {
    pub fn new() -> Self {
        Self
    }

    /// Ask the host for the frame context
    pub async fn get_context(&self) -> Result<FrameContext, String> {
        let json = await_string(frame_ffi::frame_get_context())
            .await
            .map_err(|e| format!("Frame SDK error: {}", js_error_message(&e)))?;
        FrameContext::from_json(&json)
    }

    /// Tell the host the UI can be displayed
    pub fn ready(&self) {
        if let Err(e) = frame_ffi::frame_ready() {
            log::error!("❌ [FRAME] ready() failed: {}", js_error_message(&e));
        }
    }

    /// Open an external URL through the host client
    pub fn open_url(&self, url: &str) {
        let url = url.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("🔗 [FRAME] Opening {}", url);
            if let Err(e) = await_unit(frame_ffi::frame_open_url(&url)).await {
                log::error!("❌ [FRAME] openUrl failed: {}", js_error_message(&e));
            }
        });
    }
}
