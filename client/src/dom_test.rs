use super::*;

#[test]
fn logout_display_values() {
    assert_eq!(logout_display(true), "inline-block");
    assert_eq!(logout_display(false), "none");
}

#[test]
fn busy_html_has_spinner_then_label() {
    assert_eq!(deploy_busy_html("Deploying..."), r#"<span class="spinner"></span> Deploying..."#);
}

#[test]
fn toast_class_names() {
    assert_eq!(toast_class_name(ToastKind::Success), "toast toast-success");
    assert_eq!(toast_class_name(ToastKind::Error), "toast toast-error");
}

#[test]
fn field_selector_by_name() {
    assert_eq!(field_selector("email"), r#"[name="email"]"#);
}

// =============================================================
// Strength meter
// =============================================================

#[test]
fn meter_fill_for_zero_has_no_modifier() {
    let meter = Meter::for_score(0);
    assert_eq!(meter_fill_width(&meter), "0%");
    assert_eq!(meter_fill_class(&meter), "strength-fill");
}

#[test]
fn meter_fill_for_full_score() {
    let meter = Meter::for_score(5);
    assert_eq!(meter_fill_width(&meter), "100%");
    assert_eq!(meter_fill_class(&meter), "strength-fill very-strong");
}

// =============================================================
// Demo steps
// =============================================================

#[test]
fn initial_step_is_first_checked() {
    assert_eq!(initial_step(&[false, false, true, false]), 2);
    assert_eq!(initial_step(&[false, false]), 0);
    assert_eq!(initial_step(&[]), 0);
}

#[test]
fn label_for_attribute_wins() {
    let ids = vec!["step1".to_owned(), "step2".to_owned(), "step3".to_owned()];
    assert_eq!(step_for_label(Some("step3"), 0, &ids), Some(2));
}

#[test]
fn label_without_match_falls_back_to_position() {
    let ids = vec!["step1".to_owned(), "step2".to_owned()];
    assert_eq!(step_for_label(Some("other"), 1, &ids), Some(1));
    assert_eq!(step_for_label(None, 0, &ids), Some(0));
    assert_eq!(step_for_label(None, 5, &ids), None);
}
