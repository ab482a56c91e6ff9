//! Transient notifications.
//!
//! A toast is appended to `<body>`, gains `show` shortly after so its CSS
//! transition runs, loses `show` after it has been visible long enough, and
//! is removed once the fade-out completes. Each step is a separate timer
//! keyed by the toast's id, so overlapping toasts never interfere.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::action::{Action, Timer};
use crate::config::Timing;

/// Identifies one toast for its whole lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Modifier class applied next to `toast`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// Hands out toast ids and builds the actions for each lifecycle step.
#[derive(Debug, Default)]
pub struct Toaster {
    next_id: u64,
}

impl Toaster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toast and schedule its reveal and hide.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, timing: &Timing) -> Vec<Action> {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        vec![
            Action::ShowToast { id, kind, message: message.into() },
            Action::Schedule { timer: Timer::ToastReveal(id), delay_ms: timing.toast_reveal_ms },
            Action::Schedule { timer: Timer::ToastHide(id), delay_ms: timing.toast_visible_ms },
        ]
    }
}

/// Start the fade-out and schedule removal.
#[must_use]
pub fn hide(id: ToastId, timing: &Timing) -> Vec<Action> {
    vec![
        Action::HideToast(id),
        Action::Schedule { timer: Timer::ToastRemove(id), delay_ms: timing.toast_fade_ms },
    ]
}
