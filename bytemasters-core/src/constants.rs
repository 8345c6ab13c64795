//! Markup contract and user-facing copy shared by the site behaviors.
//!
//! Class names and selectors here are owned by the page templates; the
//! script only reads them. Copy is Spanish because the site is.

// Pages --------------------------------------------------------------------
pub const HOME_PAGE: &str = "index.html";
pub const PROJECT_PAGE: &str = "proyecto.html";
pub(crate) const PHASE_PAGE_PATTERN: &str = r"(?i)^fase";

// Navigation ---------------------------------------------------------------
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const PRIMARY_NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";
pub const CONTACT_OPENER_CLASS: &str = "js-open-contact";
pub const CONTACT_OPENER_SELECTOR: &str = ".js-open-contact";
pub const ACTIVE_CLASS: &str = "active";

// Header -------------------------------------------------------------------
pub const HEADER_SELECTOR: &str = "header.navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

// Collapse widget ----------------------------------------------------------
pub const TOGGLER_SELECTOR: &str = ".navbar-toggler";
pub const COLLAPSE_SELECTOR: &str = ".navbar-collapse";
pub const COLLAPSE_SHOWN_CLASS: &str = "show";
pub const COLLAPSE_SHOW_EVENT: &str = "show.bs.collapse";
pub const COLLAPSE_HIDE_EVENT: &str = "hide.bs.collapse";

// Modal --------------------------------------------------------------------
pub const MODAL_OPEN_BODY_CLASS: &str = "modal-open";
pub const OVERLAY_CLASS: &str = "contact-overlay";
pub const PANEL_OPEN_CLASS: &str = "open";
pub const DEFAULT_CLOSE_DELAY_MS: u32 = 280;
pub const FOCUSABLE_QUERY: &str = "a[href], area[href], input:not([disabled]), select:not([disabled]), textarea:not([disabled]), button:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";
pub const FOCUS_VISIBLE_CLASS: &str = "js-focus-visible";

// Form endpoint ------------------------------------------------------------
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mrbjpdgo";
pub const FORM_ACCEPT: &str = "application/json";
pub const HIDDEN_SUBJECT_FIELD: &str = "_subject";
pub const HIDDEN_SUBJECT: &str = "Nuevo mensaje desde sitio";

// Copy ---------------------------------------------------------------------
pub const MSG_MISSING_FIELDS: &str = "Por favor completa Nombre, Email y Mensaje.";
pub const MSG_NETWORK_ERROR: &str = "Error de red.";
pub const MSG_SUBMIT_ERROR: &str = "Error al enviar, por favor inténtalo de nuevo.";
