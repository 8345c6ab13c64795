//! Active navigation link rules
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{HOME_PAGE, PHASE_PAGE_PATTERN, PROJECT_PAGE};

static PHASE_PAGE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(PHASE_PAGE_PATTERN).ok());

/// A navigation link as seen by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink<'a> {
    pub href: &'a str,
    /// Link opens the contact modal instead of navigating.
    pub opens_contact: bool,
}

/// File name of the current page, `index.html` when the path ends in `/`.
#[must_use]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => HOME_PAGE,
    }
}

/// Link href without its `#fragment`.
#[must_use]
pub fn link_target(href: &str) -> &str {
    href.split('#').next().unwrap_or_default()
}

fn is_home(page: &str) -> bool {
    page.is_empty() || page == HOME_PAGE
}

fn is_phase_page(page: &str) -> bool {
    PHASE_PAGE.as_ref().is_some_and(|re| re.is_match(page))
}

fn is_project(page: &str) -> bool {
    page == PROJECT_PAGE || is_phase_page(page)
}

/// Whether a link pointing at `target` marks the `current` page.
///
/// Home links match the home page, the project link matches the project page
/// and every `fase*` page, and any other link matches on exact file name.
#[must_use]
pub fn is_active(target: &str, current: &str) -> bool {
    let home = is_home(current) && is_home(target);
    let project = is_project(current) && target == PROJECT_PAGE;
    let exact = !target.is_empty() && target == current;
    home || project || exact
}

/// Active flag for each link, in order. Contact openers are never active.
#[must_use]
pub fn active_flags(links: &[NavLink<'_>], current: &str) -> Vec<bool> {
    links
        .iter()
        .map(|link| !link.opens_contact && is_active(link_target(link.href), current))
        .collect()
}
