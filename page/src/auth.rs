//! Mock sign-in flag.
//!
//! There is no credential check anywhere: [`login`] accepts any identifier
//! and the flag only decides which navigation affordances the page shows.
//! [`cosmetic_redirect`] sends signed-out visitors from dashboard-style pages
//! to the login page as a convenience. It is not access control; anyone can
//! set the flag from the browser console.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::AuthPages;
use crate::store::{KeyValueStore, StoreError, keys, read_or_unset};

/// Label login links switch to while signed in.
pub const DASHBOARD_LABEL: &str = "Dashboard";

const TRUE: &str = "true";

#[must_use]
pub fn is_logged_in<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    read_or_unset(store, keys::IS_LOGGED_IN).as_deref() == Some(TRUE)
}

/// Set the flag and identifier. `remember` keeps the identifier past logout.
///
/// # Errors
///
/// Returns the first [`StoreError`] hit while writing.
pub fn login<S: KeyValueStore + ?Sized>(store: &mut S, identifier: &str, remember: bool) -> Result<(), StoreError> {
    store.set(keys::IS_LOGGED_IN, TRUE)?;
    store.set(keys::USER_EMAIL, identifier)?;
    if remember {
        store.set(keys::REMEMBER_ME, TRUE)?;
    }
    Ok(())
}

/// Clear the flag, and the identifier unless it was remembered.
///
/// # Errors
///
/// Returns the first [`StoreError`] hit while removing.
pub fn logout<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    store.remove(keys::IS_LOGGED_IN)?;
    if read_or_unset(store, keys::REMEMBER_ME).as_deref() != Some(TRUE) {
        store.remove(keys::USER_EMAIL)?;
    }
    Ok(())
}

/// Identifier of the last sign-in, if still stored.
#[must_use]
pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    read_or_unset(store, keys::USER_EMAIL)
}

/// Last path segment, matching how pages are named in [`AuthPages::protected`].
#[must_use]
pub fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Login page to bounce to when `path` is a protected page and the flag is unset.
#[must_use]
pub fn cosmetic_redirect<'a, S: KeyValueStore + ?Sized>(store: &S, path: &str, pages: &'a AuthPages) -> Option<&'a str> {
    let page = page_name(path);
    let protected = pages.protected.iter().any(|p| p == page);
    if protected && !is_logged_in(store) {
        Some(pages.login_page.as_str())
    } else {
        None
    }
}
