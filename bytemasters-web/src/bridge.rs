//! `window.Site` handle for poking at the dialog from the browser console.
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::contact::ContactController;
use crate::dom;

/// Publish `Site.openContact()` and `Site.closeContact()`, keeping any
/// properties a page script already put on `window.Site`.
///
/// # Errors
/// Returns the JavaScript exception if `window.Site` cannot be read or written.
pub fn expose(controller: &ContactController) -> Result<(), JsValue> {
    let window = dom::window();
    let key = JsValue::from_str("Site");
    let existing = Reflect::get(&window, &key)?;
    let site: Object = if existing.is_object() {
        existing.unchecked_into()
    } else {
        Object::new()
    };

    let open = {
        let controller = controller.clone();
        Closure::<dyn Fn()>::new(move || controller.open())
    };
    let close = {
        let controller = controller.clone();
        Closure::<dyn Fn()>::new(move || controller.close())
    };
    Reflect::set(&site, &JsValue::from_str("openContact"), open.as_ref())?;
    Reflect::set(&site, &JsValue::from_str("closeContact"), close.as_ref())?;
    open.forget();
    close.forget();

    Reflect::set(&window, &key, &site)?;
    Ok(())
}
