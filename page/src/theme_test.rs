use super::*;
use crate::store::MemoryStore;

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_value() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn light_theme_removes_attribute() {
    assert_eq!(Theme::Light.attribute_value(), None);
    assert_eq!(Theme::Dark.attribute_value(), Some("dark"));
}

#[test]
fn save_then_load_returns_theme() {
    let mut store = MemoryStore::new();
    assert_eq!(load(&store), None);
    save(&mut store, Theme::Dark);
    assert_eq!(load(&store), Some(Theme::Dark));
    assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("dark"));
}

#[test]
fn load_ignores_unknown_values() {
    let mut store = MemoryStore::new();
    store.set(keys::THEME, "sepia").unwrap();
    assert_eq!(load(&store), None);
}

#[test]
fn stored_dark_wins_over_markup() {
    assert_eq!(initial(Some(Theme::Dark), None), Theme::Dark);
    assert_eq!(initial(Some(Theme::Dark), Some(Theme::Light)), Theme::Dark);
}

#[test]
fn stored_light_keeps_markup_theme() {
    assert_eq!(initial(Some(Theme::Light), Some(Theme::Dark)), Theme::Dark);
    assert_eq!(initial(None, None), Theme::Light);
}

#[test]
fn stylesheet_defines_dark_palette_and_meter_classes() {
    assert!(STYLESHEET.contains(r#"[data-theme="dark"]"#));
    for class in [".weak", ".fair", ".good", ".strong", ".very-strong"] {
        assert!(STYLESHEET.contains(class), "missing {class}");
    }
}
