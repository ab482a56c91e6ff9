use super::*;

#[test]
fn missing_or_blank_element_uses_defaults() {
    assert_eq!(parse_embedded(None), PageConfig::default());
    assert_eq!(parse_embedded(Some("  \n ")), PageConfig::default());
}

#[test]
fn partial_config_overrides_named_fields() {
    let config = parse_embedded(Some(r#"{ "deploySuccessRate": 0.5, "timing": { "deployMs": 500 } }"#));
    assert!((config.deploy_success_rate - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.timing.deploy_ms, 500);
    assert_eq!(config.timing.demo_interval_ms, 3000);
    assert_eq!(config.bindings.billing_toggle_id, "billing");
}

#[test]
fn malformed_json_falls_back() {
    assert_eq!(parse_embedded(Some("{ not json")), PageConfig::default());
}

#[test]
fn invalid_values_fall_back() {
    assert_eq!(parse_embedded(Some(r#"{ "deploySuccessRate": 3.0 }"#)), PageConfig::default());
}
