//! Password strength estimate for the signup page.
//!
//! One point each for: at least 8 characters, at least 12 characters, an
//! ASCII uppercase letter, an ASCII digit, and any character outside
//! `[A-Za-z0-9]`. Length counts UTF-16 code units, as `input.value.length`
//! does in the browser.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const MAX_SCORE: u8 = 5;

/// Markup of the injected meter widget.
pub const METER_HTML: &str = r#"
      <div class="strength-bar">
        <div class="strength-fill"></div>
      </div>
      <div class="strength-text">Password strength: <span>None</span></div>
    "#;

/// Class the meter wrapper is created with.
pub const METER_CLASS: &str = "password-strength";

/// Label shown for a score of zero.
pub const NONE_LABEL: &str = "None";

/// Score a password from 0 to [`MAX_SCORE`].
#[must_use]
pub fn strength_score(password: &str) -> u8 {
    let len = password.encode_utf16().count();
    let mut score = 0;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score.min(MAX_SCORE)
}

/// Named strength bands for scores 1 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    #[must_use]
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => None,
            1 => Some(Self::Weak),
            2 => Some(Self::Fair),
            3 => Some(Self::Good),
            4 => Some(Self::Strong),
            _ => Some(Self::VeryStrong),
        }
    }

    /// Class added next to `strength-fill`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very strong",
        }
    }
}

/// Rendered state of the meter widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Meter {
    pub score: u8,
    /// Fill width in percent: `score * 20`.
    pub width_percent: u8,
    /// Modifier class on the fill, `None` at score zero.
    pub class: Option<&'static str>,
    pub label: &'static str,
}

impl Meter {
    #[must_use]
    pub fn for_password(password: &str) -> Self {
        Self::for_score(strength_score(password))
    }

    #[must_use]
    pub fn for_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let strength = Strength::from_score(score);
        Self {
            score,
            width_percent: score * 20,
            class: strength.map(Strength::class),
            label: strength.map_or(NONE_LABEL, Strength::label),
        }
    }
}
