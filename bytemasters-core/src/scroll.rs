//! Header shadow threshold

/// Header carries the scrolled style once the page is strictly past `threshold`.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}
