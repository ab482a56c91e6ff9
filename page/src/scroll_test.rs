#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#pricing"), Some("pricing"));
    assert_eq!(fragment_id("#deploy"), Some("deploy"));
}

#[test]
fn non_fragment_hrefs_have_no_target() {
    assert_eq!(fragment_id("login.html"), None);
    assert_eq!(fragment_id("/index.html#pricing"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn offset_subtracts_header_from_absolute_position() {
    assert_eq!(target_offset(400.0, 1200.0, 64.0), 1536.0);
}

#[test]
fn offset_without_header_is_absolute_position() {
    assert_eq!(target_offset(250.0, 0.0, 0.0), 250.0);
}

#[test]
fn offset_never_goes_above_the_page() {
    assert_eq!(target_offset(10.0, 0.0, 64.0), 0.0);
    assert_eq!(target_offset(-500.0, 100.0, 0.0), 0.0);
}
