// ============================================================================
// EVENT HANDLING
// ============================================================================
// Click closures are owned by a ListenerBag instead of being forgotten.
// The App clears the bag on every full render, together with the DOM that
// referenced them, so replaced screens release their handlers.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

pub type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

/// Keeps listeners alive for exactly one rendered screen
pub struct ListenerBag<T = ClickClosure> {
    listeners: RefCell<Vec<T>>,
}

impl<T> ListenerBag<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn keep(&self, listener: T) {
        self.listeners.borrow_mut().push(listener);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Drop every listener of the previous screen, returns how many
    pub fn clear(&self) -> usize {
        // take first: dropping a listener must not run under the borrow
        let old = std::mem::take(&mut *self.listeners.borrow_mut());
        old.len()
    }
}

impl<T> Default for ListenerBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn on_click<F>(element: &Element, listeners: &ListenerBag, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure: ClickClosure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    listeners.keep(closure);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_clear_releases_every_kept_listener() {
        let bag: ListenerBag<Rc<()>> = ListenerBag::new();
        let captured = Rc::new(());
        for _ in 0..3 {
            bag.keep(captured.clone());
        }
        assert_eq!(bag.len(), 3);
        assert_eq!(Rc::strong_count(&captured), 4);

        assert_eq!(bag.clear(), 3);
        assert_eq!(bag.len(), 0);
        assert_eq!(Rc::strong_count(&captured), 1);
    }

    #[test]
    fn test_renders_do_not_accumulate_listeners() {
        let bag: ListenerBag<u32> = ListenerBag::default();
        for render in 0..5 {
            bag.clear();
            bag.keep(render);
            bag.keep(render);
        }
        assert_eq!(bag.len(), 2);
    }
}
