//! In-page anchor scrolling under a fixed header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id an in-page href points at.
///
/// Returns `None` for a bare `"#"` and for hrefs that are not fragments.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Absolute scroll offset that puts a target just below the fixed header.
///
/// `target_top` is the target's top relative to the viewport (as reported by
/// `getBoundingClientRect`), `scroll_y` the current window scroll.
#[must_use]
pub fn target_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (target_top + scroll_y - header_height).max(0.0)
}
