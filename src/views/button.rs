// ============================================================================
// BUTTON VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder, ListenerBag};
use crate::state::AppState;
use crate::viewmodels::screen::{Action, ButtonModel};
use crate::viewmodels::dispatch;

const BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground disabled:opacity-50";

pub fn render_button(state: &AppState, listeners: &ListenerBag, model: &ButtonModel) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("button")?
        .class(BUTTON_CLASS)
        .attr("type", if model.action == Action::Mint { "submit" } else { "button" })?
        .disabled(model.disabled);

    if model.spinner {
        let spinner = ElementBuilder::new("span")?
            .class("mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent")
            .attr("aria-hidden", "true")?
            .build();
        builder = builder.child(spinner)?;
    }
    let button = builder.append_text(model.label)?.build();

    let state = state.clone();
    let action = model.action;
    on_click(&button, listeners, move |_| dispatch(&state, action))?;

    Ok(button)
}
