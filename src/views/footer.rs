// ============================================================================
// FOOTER VIEW - Sponsor link
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder, ListenerBag};
use crate::state::AppState;
use crate::viewmodels::dispatch;
use crate::viewmodels::screen::FooterModel;

pub fn render_footer(state: &AppState, listeners: &ListenerBag, model: &FooterModel) -> Result<Element, JsValue> {
    let logo = ElementBuilder::new("img")?
        .class("h-16")
        .attr("src", model.logo)?
        .attr("alt", model.alt)?
        .build();

    let link = ElementBuilder::new("button")?
        .class("cursor-pointer underline-offset-4 hover:underline")
        .attr("type", "button")?
        .child(logo)?
        .build();

    let state = state.clone();
    let action = model.action;
    on_click(&link, listeners, move |_| dispatch(&state, action))?;

    ElementBuilder::new("div")?
        .class("mt-18 text-center")
        .child(link)
        .map(ElementBuilder::build)
}
