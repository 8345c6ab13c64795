use bytemasters_core::constants::{CONTACT_OPENER_SELECTOR, PRIMARY_NAV_LINK_SELECTOR};

use crate::collapse;
use crate::contact::ContactController;
use crate::dom;

/// Wire every contact opener to the dialog and make nav links close the mobile menu.
pub fn wire_openers(controller: &ContactController) {
    for opener in dom::query_all(CONTACT_OPENER_SELECTOR) {
        let controller = controller.clone();
        dom::listen(&opener, "click", move |e| {
            e.prevent_default();
            controller.open();
        });
    }
    for link in dom::query_all(PRIMARY_NAV_LINK_SELECTOR) {
        dom::listen(&link, "click", |_| collapse::hide_menu_if_shown());
    }
}
