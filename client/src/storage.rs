//! `localStorage` as a [`KeyValueStore`].

use page::store::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// The window's `localStorage`, or nothing when the browser denies access
/// (private modes, disabled storage). Every call then fails with
/// [`StoreError::Unavailable`] and the features read as unset.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage denied: {e:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn backend_error(value: JsValue) -> StoreError {
    StoreError::Backend(format!("{value:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(backend_error)
    }
}
