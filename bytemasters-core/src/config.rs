//! Site configuration
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLOSE_DELAY_MS, DEFAULT_FORM_ENDPOINT, DEFAULT_SCROLL_THRESHOLD};

/// Tunables for the site behaviors.
///
/// Every field has a default, so a page may embed a partial JSON document
/// that only overrides what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub scroll_threshold: f64,
    pub close_delay_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            log_level: String::from("info"),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document on top of the defaults.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the form endpoint when a non-blank override is supplied.
    #[must_use]
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.form_endpoint = endpoint.to_string();
        }
        self
    }

    /// Log level for the console logger, falling back to `Info` on unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
