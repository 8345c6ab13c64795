//! Bridge to the page's Bootstrap collapse widget for the mobile menu.
//!
//! The widget is an optional global; every call here tolerates its absence.
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use bytemasters_core::constants::{
    COLLAPSE_HIDE_EVENT, COLLAPSE_SELECTOR, COLLAPSE_SHOW_EVENT, COLLAPSE_SHOWN_CLASS,
    TOGGLER_SELECTOR,
};

use crate::dom;

fn expanded(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Mirror the collapse widget's show/hide events into the toggler's `aria-expanded`.
pub fn sync_toggler() {
    let (Some(toggler), Some(collapse)) =
        (dom::query(TOGGLER_SELECTOR), dom::query(COLLAPSE_SELECTOR))
    else {
        return;
    };
    for (event, value) in [(COLLAPSE_SHOW_EVENT, true), (COLLAPSE_HIDE_EVENT, false)] {
        let toggler = toggler.clone();
        dom::listen(&collapse, event, move |_| {
            let _ = toggler.set_attribute("aria-expanded", expanded(value));
        });
    }
    let shown = collapse.class_list().contains(COLLAPSE_SHOWN_CLASS);
    let _ = toggler.set_attribute("aria-expanded", expanded(shown));
}

/// Collapse the mobile menu if it is currently expanded.
pub fn hide_menu_if_shown() {
    let Some(collapse) = dom::query(COLLAPSE_SELECTOR) else {
        return;
    };
    if !collapse.class_list().contains(COLLAPSE_SHOWN_CLASS) {
        return;
    }
    if let Err(err) = hide_with_bootstrap(&collapse) {
        log::debug!(
            "collapse widget unavailable: {}",
            dom::js_error_message(&err)
        );
    }
}

fn hide_with_bootstrap(collapse: &Element) -> Result<(), JsValue> {
    let bootstrap = Reflect::get(&dom::window(), &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(());
    }
    let ctor = Reflect::get(&bootstrap, &JsValue::from_str("Collapse"))?;
    let Some(ctor) = ctor.dyn_ref::<Function>() else {
        return Ok(());
    };

    let get_instance =
        Reflect::get(ctor, &JsValue::from_str("getInstance"))?.dyn_into::<Function>()?;
    let mut instance = get_instance.call1(ctor, collapse)?;
    if instance.is_undefined() || instance.is_null() {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("toggle"), &JsValue::FALSE)?;
        instance = Reflect::construct(ctor, &Array::of2(collapse, &options))?;
    }

    let hide = Reflect::get(&instance, &JsValue::from_str("hide"))?.dyn_into::<Function>()?;
    hide.call0(&instance)?;
    Ok(())
}
