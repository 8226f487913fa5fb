// ============================================================================
// APP VIEW - Root layout
// ============================================================================
// No logic: renders whatever ScreenModel the view model produced
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder, ListenerBag};
use crate::state::AppState;
use crate::viewmodels::{ScreenModel, ViewBranch};
use crate::views::{render_block, render_button, render_footer};

pub fn render_screen(state: &AppState, listeners: &ListenerBag, screen: &ScreenModel) -> Result<Element, JsValue> {
    if screen.branch == ViewBranch::Loading {
        // Placeholder only, no layout
        return match screen.blocks.first() {
            Some(block) => render_block(state, listeners, block),
            None => ElementBuilder::new("div").map(ElementBuilder::build),
        };
    }

    let container = ElementBuilder::new("div")?
        .class("flex flex-col items-center justify-center min-h-screen gap-4 mx-4")
        .attr("data-branch", &format!("{:?}", screen.branch))?
        .build();

    for block in &screen.blocks {
        append_child(&container, &render_block(state, listeners, block)?)?;
    }

    if let Some(wallet) = &screen.wallet_button {
        append_child(&container, &render_button(state, listeners, wallet)?)?;
    }

    if let Some(footer) = &screen.footer {
        append_child(&container, &render_footer(state, listeners, footer)?)?;
    }

    Ok(container)
}
