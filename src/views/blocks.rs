// ============================================================================
// BLOCK VIEWS - Headings, paragraphs, images
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, ListenerBag};
use crate::state::AppState;
use crate::viewmodels::screen::Block;
use crate::views::render_button;

pub fn render_block(state: &AppState, listeners: &ListenerBag, block: &Block) -> Result<Element, JsValue> {
    let element = match block {
        Block::Placeholder(text) => ElementBuilder::new("div")?.text(text).build(),
        Block::Heading(text) => ElementBuilder::new("h2")?
            .class("text-3xl font-bold")
            .text(text)
            .build(),
        Block::Paragraph(text) => ElementBuilder::new("p")?.text(text).build(),
        Block::Image { src, alt } => ElementBuilder::new("img")?
            .attr("src", src)?
            .attr("alt", alt)?
            .build(),
        Block::Button(button) => render_button(state, listeners, button)?,
    };
    Ok(element)
}
