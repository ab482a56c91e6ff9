//! Key-value persistence behind the page features.
//!
//! The browser's `localStorage` is the production backend (see the `client`
//! crate); [`MemoryStore`] stands in for it in tests and native builds.
//!
//! ERROR HANDLING
//! ==============
//! Page features never fail because storage failed. The `*_or_*` helpers log
//! the error and treat the value as unset, which is what a page without
//! storage access would show anyway.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

/// Storage keys shared with the static markup and any other script on the site.
pub mod keys {
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const USER_EMAIL: &str = "userEmail";
    pub const REMEMBER_ME: &str = "rememberMe";
    pub const BILLING_PREFERENCE: &str = "billingPreference";
    pub const THEME: &str = "theme";
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be opened (e.g. storage disabled by the browser).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected the call.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string-to-string store with the semantics of `localStorage`.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read `key`, treating a backend failure as unset.
pub fn read_or_unset<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("storage read of {key} failed: {e}");
            None
        }
    }
}

/// Write `key`, logging a backend failure.
pub fn write_or_warn<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("storage write of {key} failed: {e}");
    }
}
