//! Markup fragments and element lookup.
//!
//! The string builders and index helpers are browser-free and tested
//! natively. The `web_sys` lookups below them exist only with `hydrate`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use page::password::Meter;
use page::toast::ToastKind;

/// `display` of logout links while signed in.
pub const LOGOUT_SHOWN: &str = "inline-block";
pub const LOGOUT_HIDDEN: &str = "none";

/// Class a toast gains once its entry transition should run.
pub const TOAST_SHOW_CLASS: &str = "show";

pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;

/// Form controls whose edits clear inline errors.
pub const EDITABLE_FIELDS: &str = "input, textarea";

pub const METER_FILL: &str = ".strength-fill";
pub const METER_TEXT: &str = ".strength-text span";

#[must_use]
pub fn logout_display(visible: bool) -> &'static str {
    if visible { LOGOUT_SHOWN } else { LOGOUT_HIDDEN }
}

/// Inner HTML of a deploy control while busy.
#[must_use]
pub fn deploy_busy_html(label: &str) -> String {
    format!(r#"<span class="spinner"></span> {label}"#)
}

#[must_use]
pub fn toast_class_name(kind: ToastKind) -> String {
    format!("toast {}", kind.class())
}

#[must_use]
pub fn field_selector(field: &str) -> String {
    format!(r#"[name="{field}"]"#)
}

#[must_use]
pub fn meter_fill_width(meter: &Meter) -> String {
    format!("{}%", meter.width_percent)
}

#[must_use]
pub fn meter_fill_class(meter: &Meter) -> String {
    match meter.class {
        Some(class) => format!("strength-fill {class}"),
        None => "strength-fill".to_owned(),
    }
}

/// Index of the first checked radio, or 0.
#[must_use]
pub fn initial_step(checked: &[bool]) -> usize {
    checked.iter().position(|c| *c).unwrap_or(0)
}

/// Step a clicked label selects.
///
/// A label's `for` attribute names its radio. Labels without a matching
/// `for` select the radio at the same position.
#[must_use]
pub fn step_for_label(label_for: Option<&str>, label_index: usize, step_ids: &[String]) -> Option<usize> {
    if let Some(target) = label_for {
        if let Some(step) = step_ids.iter().position(|id| id == target) {
            return Some(step);
        }
    }
    (label_index < step_ids.len()).then_some(label_index)
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

    /// Every element matching `selector`, in document order.
    ///
    /// A selector the browser rejects matches nothing.
    pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
        match root.query_selector_all(selector) {
            Ok(list) => nodes_to_elements(&list),
            Err(e) => {
                log::warn!("bad selector {selector:?}: {e:?}");
                Vec::new()
            }
        }
    }

    pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
        match root.query_selector_all(selector) {
            Ok(list) => nodes_to_elements(&list),
            Err(e) => {
                log::warn!("bad selector {selector:?}: {e:?}");
                Vec::new()
            }
        }
    }

    fn nodes_to_elements(list: &web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn query_one(root: &Document, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    pub fn query_one_in(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    pub fn input_by_id(root: &Document, id: &str) -> Option<HtmlInputElement> {
        root.get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    /// Current value of an `<input>` or `<textarea>`.
    pub fn field_value(el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    pub fn is_checked(el: &Element) -> bool {
        el.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)
    }
}
