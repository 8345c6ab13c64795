use bytemasters_core::constants::{HEADER_SELECTOR, SCROLLED_CLASS};
use bytemasters_core::is_scrolled;
use web_sys::Element;

use crate::dom;

fn apply(header: &Element, threshold: f64) {
    let offset = dom::window().scroll_y().unwrap_or_default();
    let _ = if is_scrolled(offset, threshold) {
        header.class_list().add_1(SCROLLED_CLASS)
    } else {
        header.class_list().remove_1(SCROLLED_CLASS)
    };
}

/// Keep `header.navbar` styled as scrolled while the page is past `threshold`.
///
/// Pages without the header skip the behavior entirely.
pub fn install_scroll_shadow(threshold: f64) {
    let Some(header) = dom::query(HEADER_SELECTOR) else {
        return;
    };
    {
        let header = header.clone();
        dom::listen_passive(&dom::window(), "scroll", move |_| apply(&header, threshold));
    }
    apply(&header, threshold);
}
