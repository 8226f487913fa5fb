// ============================================================================
// IMAGE PRELOADER - Warm the browser cache for every screen image
// ============================================================================

use web_sys::HtmlImageElement;

/// Fire-and-forget: start a background fetch for each URL
pub fn preload_images(urls: &[&str]) {
    for url in urls {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(url),
            Err(e) => log::debug!("[PRELOAD] Could not create image for {}: {:?}", url, e),
        }
    }
    log::info!("🖼️ [PRELOAD] {} images requested", urls.len());
}
