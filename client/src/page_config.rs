//! Embedded page configuration.
//!
//! A page may carry `<script type="application/json" id="page-config">` with
//! a partial [`PageConfig`]. Missing fields take defaults. A config that does
//! not parse or validate is logged and replaced by the defaults, so a typo in
//! one page never disables its behavior.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use page::config::PageConfig;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Resolve the contents of the config element, if any.
#[must_use]
pub fn parse_embedded(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            PageConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
#[must_use]
pub fn load(document: &web_sys::Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse_embedded(raw.as_deref())
}
