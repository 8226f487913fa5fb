// ============================================================================
// IS IT THE WEEKEND? - Frame mini-app (Rust + WASM, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: branch selection + async flows
// - Services: ONLY talk to the JS bridge
// - State: Rc<RefCell> state with change notifications
// - Models: data shared with the bridge
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::AppConfig;

// Keeps the App instance alive for the page lifetime
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Is it the Weekend? starting (contract {})", config.contract.address);

    if let Err(problems) = config.validate() {
        for problem in problems {
            log::error!("❌ [CONFIG] {}", problem);
        }
    }

    let mut app = App::new(config)?;
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut app) => match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-rendering: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App is not initialized"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] App busy, skipping render"),
    });
}

/// Callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
