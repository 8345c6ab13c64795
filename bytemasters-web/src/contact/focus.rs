use bytemasters_core::constants::FOCUSABLE_QUERY;
use bytemasters_core::{KeyAction, key_action, wrap_target};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::dom;

/// Keep Tab inside the panel and close on Escape.
///
/// Focusable elements are looked up on every keypress because the success
/// view swaps out the form's controls. Tab from outside the panel lands on
/// its first control.
pub fn keydown_handler(container_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        let direction = match key_action(&e.key(), e.shift_key()) {
            KeyAction::Close => {
                on_close.emit(());
                return;
            }
            KeyAction::Ignore => return,
            KeyAction::Tab(direction) => direction,
        };
        let Some(container) = container_ref.cast::<web_sys::Element>() else {
            return;
        };
        let focusables: Vec<HtmlElement> = dom::query_all_in(&container, FOCUSABLE_QUERY)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let Some(first) = focusables.first() else {
            return;
        };
        let Some(active) = dom::document().active_element() else {
            return;
        };
        if !container.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
            return;
        }
        let active_idx = focusables
            .iter()
            .position(|el| el.unchecked_ref::<web_sys::Element>() == &active);
        if let Some(target) = wrap_target(focusables.len(), active_idx, direction)
            .and_then(|idx| focusables.get(idx))
        {
            e.prevent_default();
            let _ = target.focus();
        }
    })
}

/// Move focus to the dialog's first field once it is in the document.
pub fn focus_first(field_ref: &NodeRef) {
    if let Some(field) = field_ref.cast::<HtmlElement>() {
        let _ = field.focus();
    }
}
