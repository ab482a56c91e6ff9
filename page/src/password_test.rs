use super::*;

// =============================================================
// strength_score
// =============================================================

#[test]
fn empty_password_scores_zero() {
    assert_eq!(strength_score(""), 0);
}

#[test]
fn lowercase_letters_only_score_by_length() {
    assert_eq!(strength_score("abcdefg"), 0);
    assert_eq!(strength_score("abcdefgh"), 1);
    assert_eq!(strength_score("abcdefghijk"), 1);
    assert_eq!(strength_score("abcdefghijkl"), 2);
}

#[test]
fn each_class_counts_once() {
    assert_eq!(strength_score("A"), 1);
    assert_eq!(strength_score("ABCDEF"), 1);
    assert_eq!(strength_score("1"), 1);
    assert_eq!(strength_score("123456"), 1);
    assert_eq!(strength_score("!"), 1);
    assert_eq!(strength_score("!!!!!!"), 1);
}

#[test]
fn all_criteria_score_five() {
    assert_eq!(strength_score("Abcdefgh123!"), 5);
    assert_eq!(strength_score("Abcdefgh123!!!!!!!!!!!!!!!!!!"), 5);
}

#[test]
fn space_and_unicode_count_as_special() {
    assert_eq!(strength_score("a b"), 1);
    assert_eq!(strength_score("é"), 1);
}

#[test]
fn non_ascii_uppercase_and_digits_do_not_count_as_such() {
    // 'É' is not [A-Z] and '٣' is not [0-9]; both only count as special.
    assert_eq!(strength_score("É٣"), 1);
}

#[test]
fn length_counts_utf16_units() {
    // Each emoji is two UTF-16 units: 4 emoji reach the 8-unit threshold.
    assert_eq!(strength_score("😀😀😀😀"), 2);
}

#[test]
fn score_is_bounded_and_monotonic_in_length() {
    let mut previous = 0;
    for len in 0..40 {
        let password = "a".repeat(len);
        let score = strength_score(&password);
        assert!(score <= MAX_SCORE);
        assert!(score >= previous, "score dropped at length {len}");
        previous = score;
    }
    assert_eq!(previous, 2);
}

#[test]
fn adding_a_class_never_lowers_the_score() {
    let samples = ["", "abc", "abcdefgh", "Abcdefgh", "Abcdefgh1", "Abcdefghijk1"];
    for base in samples {
        for extra in ["A", "7", "#"] {
            let extended = format!("{base}{extra}");
            assert!(strength_score(&extended) >= strength_score(base), "{base:?} + {extra:?}");
        }
    }
}

// =============================================================
// Meter
// =============================================================

#[test]
fn zero_score_meter_shows_none_without_fill() {
    let meter = Meter::for_score(0);
    assert_eq!(meter.width_percent, 0);
    assert_eq!(meter.class, None);
    assert_eq!(meter.label, "None");
}

#[test]
fn meter_maps_scores_to_bands() {
    let expected = [
        (1, "weak", "Weak"),
        (2, "fair", "Fair"),
        (3, "good", "Good"),
        (4, "strong", "Strong"),
        (5, "very-strong", "Very strong"),
    ];
    for (score, class, label) in expected {
        let meter = Meter::for_score(score);
        assert_eq!(meter.width_percent, score * 20);
        assert_eq!(meter.class, Some(class));
        assert_eq!(meter.label, label);
    }
}

#[test]
fn meter_clamps_out_of_range_scores() {
    assert_eq!(Meter::for_score(9), Meter::for_score(5));
}

#[test]
fn meter_for_password_uses_score() {
    let meter = Meter::for_password("Abcdefgh123!");
    assert_eq!(meter.score, 5);
    assert_eq!(meter.width_percent, 100);
}

#[test]
fn meter_markup_has_fill_and_text() {
    assert!(METER_HTML.contains("strength-fill"));
    assert!(METER_HTML.contains("strength-text"));
}
