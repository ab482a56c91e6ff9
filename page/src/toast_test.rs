use super::*;

#[test]
fn kind_classes_match_stylesheet_names() {
    assert_eq!(ToastKind::Success.class(), "toast-success");
    assert_eq!(ToastKind::Error.class(), "toast-error");
}

#[test]
fn show_creates_toast_and_schedules_reveal_and_hide() {
    let mut toaster = Toaster::new();
    let timing = Timing::default();
    let actions = toaster.show(ToastKind::Success, "done", &timing);

    assert_eq!(
        actions,
        vec![
            Action::ShowToast { id: ToastId(0), kind: ToastKind::Success, message: "done".to_owned() },
            Action::Schedule { timer: Timer::ToastReveal(ToastId(0)), delay_ms: 10 },
            Action::Schedule { timer: Timer::ToastHide(ToastId(0)), delay_ms: 5000 },
        ]
    );
}

#[test]
fn ids_increase_per_toast() {
    let mut toaster = Toaster::new();
    let timing = Timing::default();
    toaster.show(ToastKind::Success, "one", &timing);
    let second = toaster.show(ToastKind::Error, "two", &timing);
    assert!(matches!(second[0], Action::ShowToast { id: ToastId(1), kind: ToastKind::Error, .. }));
}

#[test]
fn hide_schedules_removal_after_fade() {
    let actions = hide(ToastId(4), &Timing::default());
    assert_eq!(
        actions,
        vec![
            Action::HideToast(ToastId(4)),
            Action::Schedule { timer: Timer::ToastRemove(ToastId(4)), delay_ms: 300 },
        ]
    );
}
