#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use bytemasters_core::SiteConfig;

pub mod a11y;
pub mod bridge;
pub mod collapse;
pub mod config;
pub mod contact;
pub mod dom;
pub mod header;
pub mod nav;
pub mod openers;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let (config, config_error) = config::load();
    let _ = console_log::init_with_level(config.log_level());
    if let Some(err) = config_error {
        log::warn!("ignoring malformed #{}: {err}", config::CONFIG_ELEMENT_ID);
    }
    when_ready(move || {
        init(&config);
    });
}

/// Run `f` once the document has been parsed.
pub fn when_ready(f: impl FnOnce() + 'static) {
    let document = dom::document();
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// Install every site behavior and return the page's contact dialog handle.
pub fn init(config: &SiteConfig) -> contact::ContactController {
    a11y::install_focus_visible();
    nav::highlight_active_links();
    header::install_scroll_shadow(config.scroll_threshold);
    collapse::sync_toggler();
    let controller = contact::ContactController::new(config);
    openers::wire_openers(&controller);
    if let Err(err) = bridge::expose(&controller) {
        log::warn!("window.Site unavailable: {}", dom::js_error_message(&err));
    }
    log::info!("site behaviors ready");
    controller
}
