//! Marks the navigation links that point at the page being shown.
use bytemasters_core::constants::{ACTIVE_CLASS, CONTACT_OPENER_CLASS, NAV_LINK_SELECTOR};
use bytemasters_core::{NavLink, active_flags, current_page};

use crate::dom;

/// Reset and reapply `.active` / `aria-current="page"` on every `.nav-link`.
pub fn highlight_active_links() {
    let pathname = dom::window().location().pathname().unwrap_or_default();
    let current = current_page(&pathname);

    let links = dom::query_all(NAV_LINK_SELECTOR);
    let described: Vec<(String, bool)> = links
        .iter()
        .map(|a| {
            (
                a.get_attribute("href").unwrap_or_default(),
                a.class_list().contains(CONTACT_OPENER_CLASS),
            )
        })
        .collect();
    let nav_links: Vec<NavLink<'_>> = described
        .iter()
        .map(|(href, opens_contact)| NavLink {
            href: href.as_str(),
            opens_contact: *opens_contact,
        })
        .collect();

    let flags = active_flags(&nav_links, current);
    for (link, active) in links.iter().zip(flags) {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
        let _ = link.remove_attribute("aria-current");
        if active {
            let _ = link.class_list().add_1(ACTIVE_CLASS);
            let _ = link.set_attribute("aria-current", "page");
        }
    }
    log::debug!("highlighted navigation for {current}");
}
