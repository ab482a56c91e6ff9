//! Light/dark theme preference.
//!
//! The theme lives in the `data-theme` attribute on `<html>`: `"dark"` when
//! dark, absent when light. The choice is mirrored in storage under
//! [`keys::THEME`] so the next page load starts in the same theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::store::{KeyValueStore, keys, read_or_unset, write_or_warn};

/// Attribute on `<html>` carrying the theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Marker attribute on the injected `<style>` block.
pub const STYLE_MARKER_ATTRIBUTE: &str = "data-dark-mode";

/// Contents of the generated theme toggle button.
pub const TOGGLE_HTML: &str = r#"
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
          <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
        </svg>
        <span class="visually-hidden">Toggle dark mode</span>
      "#;

/// Class list of the generated theme toggle button.
pub const TOGGLE_CLASS: &str = "btn btn-subtle";

/// Dark palette plus strength meter styling, injected once per page load.
pub const STYLESHEET: &str = r#"
      [data-theme="dark"] {
        --bg: 224, 32%, 12%;
        --surface: 224, 32%, 18%;
        --surface-2: 224, 32%, 24%;
        --text: 220, 14%, 90%;
        --text-weak: 220, 14%, 70%;
        --text-strong: 220, 20%, 98%;
        --border: 224, 32%, 30%;
      }

      .password-strength {
        margin-top: 0.5rem;
      }

      .strength-bar {
        height: 6px;
        background: hsl(var(--surface-2));
        border-radius: 3px;
        overflow: hidden;
        margin-bottom: 0.5rem;
      }

      .strength-fill {
        height: 100%;
        width: 0;
        transition: width 0.3s ease;
      }

      .strength-fill.weak { background: hsl(var(--error)); }
      .strength-fill.fair { background: orange; }
      .strength-fill.good { background: yellow; }
      .strength-fill.strong { background: limegreen; }
      .strength-fill.very-strong { background: hsl(var(--success)); }

      .strength-text {
        font-size: 0.875rem;
        color: hsl(var(--text-weak));
      }
    "#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of [`THEME_ATTRIBUTE`], or `None` when the attribute is removed.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }
}

/// Read the stored theme preference.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
    read_or_unset(store, keys::THEME).and_then(|raw| Theme::parse(&raw))
}

/// Persist the theme preference.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) {
    write_or_warn(store, keys::THEME, theme.as_str());
}

/// Theme in effect after load: a stored `"dark"` wins, otherwise whatever the
/// markup already declared.
#[must_use]
pub fn initial(stored: Option<Theme>, document: Option<Theme>) -> Theme {
    if stored == Some(Theme::Dark) {
        Theme::Dark
    } else {
        document.unwrap_or_default()
    }
}
