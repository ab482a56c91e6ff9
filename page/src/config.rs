//! Page configuration: view bindings, timings and behavior knobs.
//!
//! Every field has a default matching the site's markup, so an empty JSON
//! object (or no configuration at all) yields a working page. Hosts may embed
//! a partial override as camelCase JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEMO_INTERVAL_MS: u32 = 3000;
pub const DEFAULT_DEMO_RESUME_MS: u32 = 10_000;
pub const DEFAULT_DEPLOY_MS: u32 = 2000;
pub const DEFAULT_CONTACT_SEND_MS: u32 = 1500;
pub const DEFAULT_TOAST_REVEAL_MS: u32 = 10;
pub const DEFAULT_TOAST_VISIBLE_MS: u32 = 5000;
pub const DEFAULT_TOAST_FADE_MS: u32 = 300;

pub const DEFAULT_DEPLOY_SUCCESS_RATE: f64 = 0.8;
pub const DEFAULT_MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Top-level page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub bindings: ViewBindings,
    pub timing: Timing,
    pub auth: AuthPages,
    /// Probability in `[0, 1]` that a simulated deploy succeeds.
    pub deploy_success_rate: f64,
    /// Minimum contact message length, in UTF-16 code units.
    pub min_message_len: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            bindings: ViewBindings::default(),
            timing: Timing::default(),
            auth: AuthPages::default(),
            deploy_success_rate: DEFAULT_DEPLOY_SUCCESS_RATE,
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
        }
    }
}

impl PageConfig {
    /// Parse and validate a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.deploy_success_rate) {
            return Err(ConfigError::Invalid(format!(
                "deploySuccessRate must be within [0, 1], got {}",
                self.deploy_success_rate
            )));
        }
        if self.timing.demo_interval_ms == 0 {
            return Err(ConfigError::Invalid("timing.demoIntervalMs must be positive".to_owned()));
        }
        if self.auth.login_page.is_empty() || self.auth.dashboard_page.is_empty() {
            return Err(ConfigError::Invalid("auth pages must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// Delays for every timer the page schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub demo_interval_ms: u32,
    pub demo_resume_ms: u32,
    pub deploy_ms: u32,
    pub contact_send_ms: u32,
    pub toast_reveal_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            demo_interval_ms: DEFAULT_DEMO_INTERVAL_MS,
            demo_resume_ms: DEFAULT_DEMO_RESUME_MS,
            deploy_ms: DEFAULT_DEPLOY_MS,
            contact_send_ms: DEFAULT_CONTACT_SEND_MS,
            toast_reveal_ms: DEFAULT_TOAST_REVEAL_MS,
            toast_visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

/// Page names used by the mock sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthPages {
    /// Last path segments that bounce to `login_page` while signed out.
    pub protected: Vec<String>,
    pub login_page: String,
    pub dashboard_page: String,
}

impl Default for AuthPages {
    fn default() -> Self {
        Self {
            protected: vec!["dashboard.html".to_owned()],
            login_page: "login.html".to_owned(),
            dashboard_page: "dashboard.html".to_owned(),
        }
    }
}

/// Every DOM element the page features touch.
///
/// `*_id` fields are element ids; everything else is a CSS selector. Features
/// whose elements are missing from the page do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewBindings {
    pub nav_toggle_id: String,
    pub nav_links: String,
    pub anchors: String,
    pub site_header: String,
    pub billing_toggle_id: String,
    pub demo_steps: String,
    pub step_labels: String,
    pub deploy_buttons: String,
    pub contact_form: String,
    pub login_form: String,
    pub login_links: String,
    pub logout_links: String,
    pub user_slot: String,
    pub password_field_id: String,
    pub strength_meter: String,
    pub theme_toggle_id: String,
    pub header_ctas: String,
    pub dark_mode_styles: String,
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self {
            nav_toggle_id: "nav-toggle".to_owned(),
            nav_links: ".site-nav a".to_owned(),
            anchors: r##"a[href^="#"]"##.to_owned(),
            site_header: ".site-header".to_owned(),
            billing_toggle_id: "billing".to_owned(),
            demo_steps: r#"input[name="step"]"#.to_owned(),
            step_labels: ".step-select label".to_owned(),
            deploy_buttons: r##"a[href="#deploy"]"##.to_owned(),
            contact_form: r#"form[name="contact"]"#.to_owned(),
            login_form: r#"form[name="login"]"#.to_owned(),
            login_links: r##"a[href="login.html"], a[href="#login"]"##.to_owned(),
            logout_links: r##"a[href="#logout"]"##.to_owned(),
            user_slot: "[data-user-email]".to_owned(),
            password_field_id: "new-password".to_owned(),
            strength_meter: ".password-strength".to_owned(),
            theme_toggle_id: "theme-toggle".to_owned(),
            header_ctas: ".header-ctas".to_owned(),
            dark_mode_styles: "style[data-dark-mode]".to_owned(),
        }
    }
}
