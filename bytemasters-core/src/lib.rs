//! Bytemasters site core
//!
//! Platform-agnostic interaction rules for the Bytemasters marketing site.
//! Everything here is decided without touching a browser: which navigation
//! links are current, when the header casts a shadow, where the focus trap
//! wraps, whether a contact form may be sent, and how the contact modal moves
//! through its lifecycle. The `bytemasters-web` crate applies these decisions
//! to the DOM.

pub mod config;
pub mod constants;
pub mod contact;
pub mod focus;
pub mod modal;
pub mod nav;
pub mod scroll;

// Re-export commonly used types
pub use config::SiteConfig;
pub use contact::{ContactForm, RequiredField, Subject, SubmitError, ValidationError};
pub use focus::{KeyAction, TabDirection, key_action, wrap_target};
pub use modal::{CloseEffect, ModalPhase, ModalSession, SubmitDecision, SubmitResolution};
pub use nav::{NavLink, active_flags, current_page, is_active, link_target};
pub use scroll::is_scrolled;
