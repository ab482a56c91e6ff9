//! What the host found on the current page.

use crate::theme::Theme;

/// Presence report produced by the host after resolving
/// [`ViewBindings`](crate::config::ViewBindings) against the document.
///
/// The controller consults it to decide which features to wire up; anything
/// reported absent stays a no-op for the page's lifetime.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// `location.pathname` of the current page.
    pub path: String,
    pub has_billing_toggle: bool,
    /// Number of demo step radios.
    pub demo_steps: usize,
    /// Index of the step radio checked in the markup.
    pub initial_step: usize,
    pub has_password_field: bool,
    pub has_theme_toggle: bool,
    pub has_header_ctas: bool,
    /// A `style[data-dark-mode]` block is already present.
    pub has_dark_mode_styles: bool,
    pub has_user_slot: bool,
    /// Theme attribute on `<html>` before any script ran.
    pub document_theme: Option<Theme>,
}
