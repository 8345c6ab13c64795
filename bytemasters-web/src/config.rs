//! Page-level configuration.
//!
//! A page may embed `<script type="application/json" id="site-config">` with
//! any subset of [`SiteConfig`] fields. `CONTACT_FORM_ENDPOINT`, when set at
//! compile time, wins over both the page and the default endpoint.
use bytemasters_core::SiteConfig;

use crate::dom;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Resolve the configuration for this page.
///
/// A malformed page document is returned alongside the defaults so it can be
/// reported once logging is up.
#[must_use]
pub fn load() -> (SiteConfig, Option<serde_json::Error>) {
    let (config, error) = match page_json() {
        Some(json) => match SiteConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        },
        None => (SiteConfig::default(), None),
    };
    (
        config.with_endpoint_override(option_env!("CONTACT_FORM_ENDPOINT")),
        error,
    )
}

fn page_json() -> Option<String> {
    dom::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
