// ============================================================================
// APP - Main application
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::{AppConfig, PRELOAD_IMAGES};
use crate::dom::{append_child, get_element_by_id, set_inner_html, ListenerBag};
use crate::services::preload_images;
use crate::state::AppState;
use crate::viewmodels::{build_screen, SessionViewModel, ViewBranch, WalletViewModel, WeekendViewModel};
use crate::views::render_screen;

/// Id of the mount point in index.html
pub const ROOT_ID: &str = "root";

pub struct App {
    state: AppState,
    root: Element,
    /// Click handlers of the screen currently mounted under root
    listeners: ListenerBag,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #root element found"))?;

        let state = AppState::new(config);

        // Batch every change of the current tick into one re-render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root,
            listeners: ListenerBag::new(),
        })
    }

    /// Kick off the asynchronous work: frame session, wallet, weekend read
    pub fn start(&self) {
        SessionViewModel::new().initialize(&self.state);

        let wallet = WalletViewModel::new();
        wallet.sync_account(&self.state);
        wallet.start_watching(&self.state);

        let weekend = WeekendViewModel::new(&self.state);
        weekend.query(&self.state);
        weekend.start_refresh(&self.state);
    }

    /// Full render of the current state
    pub fn render(&mut self) -> Result<(), JsValue> {
        let screen = build_screen(&self.state.snapshot());
        log::debug!("🎬 [APP] Rendering {:?}", screen.branch);

        set_inner_html(&self.root, "");
        let released = self.listeners.clear();
        log::debug!("🎬 [APP] Released {} click listeners", released);
        let view = render_screen(&self.state, &self.listeners, &screen)?;
        append_child(&self.root, &view)?;

        // Preloader mounts with the first real screen
        if screen.branch != ViewBranch::Loading && self.state.try_begin_preload() {
            preload_images(&PRELOAD_IMAGES);
        }
        Ok(())
    }
}
