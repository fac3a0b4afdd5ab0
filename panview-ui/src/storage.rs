// panview-ui/src/storage.rs
//! Preference storage backed by `localStorage`.

use panview_core::{MemoryStore, PanviewError, PreferenceStore};
use web_sys::Storage;

use crate::errors::js_error_message;

/// `localStorage` when the browser grants it, otherwise an in-memory store
/// that lasts for the page (private mode, sandboxed iframes).
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("localStorage unavailable; preferences will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PanviewError> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| PanviewError::Storage(js_error_message(&e))),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}
