//! Persisted user preferences.
//!
//! Only one preference exists: the dark-mode flag, stored as the string
//! `"true"` or `"false"`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PanviewError;

/// Durable string key-value store scoped to the page origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PanviewError>;
}

/// Interpret a stored dark-mode value. Only the exact string `"true"` turns
/// dark mode on; absent or malformed values mean off.
pub fn parse_dark_mode(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// Encode the flag the way `parse_dark_mode` reads it.
pub fn encode_dark_mode(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

/// In-memory store, used when the browser store is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PanviewError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
