// Accessibility helpers

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, KeyboardEvent};

use bytemasters_core::constants::FOCUS_VISIBLE_CLASS;

use crate::dom;

const POINTER_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

type Slot = Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>>;

/// Toggle the keyboard-navigation marker on `<html>`.
pub fn set_focus_visible(enabled: bool) {
    if let Some(html) = dom::document().document_element() {
        let _ = if enabled {
            html.class_list().add_1(FOCUS_VISIBLE_CLASS)
        } else {
            html.class_list().remove_1(FOCUS_VISIBLE_CLASS)
        };
    }
}

/// Show focus rings only once the visitor starts navigating with Tab.
///
/// The first Tab adds the marker and arms a one-shot pointer listener; the
/// first mouse or touch press after that removes it again. Each listener
/// detaches itself after firing.
pub fn install_focus_visible() {
    let on_key: Slot = Rc::default();
    let on_pointer: Slot = Rc::default();

    let pointer_slot = on_pointer.clone();
    *on_pointer.borrow_mut() = Some(Closure::new(move |_: Event| {
        set_focus_visible(false);
        if let Some(cb) = pointer_slot.borrow().as_ref() {
            let window = dom::window();
            for event in POINTER_EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }));

    let key_slot = on_key.clone();
    let pointer = on_pointer;
    *on_key.borrow_mut() = Some(Closure::new(move |e: Event| {
        let is_tab = e
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Tab");
        if !is_tab {
            return;
        }
        set_focus_visible(true);
        let window = dom::window();
        if let Some(cb) = key_slot.borrow().as_ref() {
            let _ = window
                .remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = pointer.borrow().as_ref() {
            for event in POINTER_EVENTS {
                let _ =
                    window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }));

    if let Some(cb) = on_key.borrow().as_ref() {
        let _ = dom::window()
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
    }
}
