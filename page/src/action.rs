//! Effects returned from controller handlers for the host to apply.

use crate::password::Meter;
use crate::theme::Theme;
use crate::toast::{ToastId, ToastKind};

/// The two forms the page validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Login,
}

/// Timer keys. At most one timer per key is pending; scheduling a key again
/// replaces the pending one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    DemoAdvance,
    DemoResume,
    /// Simulated deploy on the deploy control at this index finishes.
    DeployFinish(usize),
    ContactSent,
    ToastReveal(ToastId),
    ToastHide(ToastId),
    ToastRemove(ToastId),
}

/// One DOM effect or timer request, applied by the host in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Suppress the default of the event being handled.
    PreventDefault,
    /// Navigate to another page.
    Redirect(String),
    /// Reload the current page.
    Reload,
    /// Relabel every login link and point it elsewhere.
    ShowDashboardLinks { label: String, href: String },
    SetLogoutVisible(bool),
    ShowCurrentUser(String),
    /// Smooth-scroll the window to an absolute offset.
    ScrollTo { top: f64 },
    SetNavOpen(bool),
    SetBillingChecked(bool),
    SelectDemoStep(usize),
    SetDeployBusy { button: usize, label: String },
    RestoreDeployLabel { button: usize, label: String },
    /// Replace any inline error on `field` with `message`.
    ShowFieldError { form: FormKind, field: String, message: String },
    ClearFieldError { form: FormKind, field: String },
    SetSubmitState { form: FormKind, label: String, disabled: bool },
    ResetForm(FormKind),
    ShowToast { id: ToastId, kind: ToastKind, message: String },
    RevealToast(ToastId),
    HideToast(ToastId),
    RemoveToast(ToastId),
    InjectStrengthMeter,
    UpdateStrengthMeter(Meter),
    SetTheme(Theme),
    /// Create the theme toggle, prepending it to the header actions if present.
    CreateThemeToggle { in_header: bool },
    InjectStyles,
    Schedule { timer: Timer, delay_ms: u32 },
    Cancel(Timer),
}
