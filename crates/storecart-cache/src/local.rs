//! Browser `localStorage` backend.

use crate::{CacheError, KvStore};

/// Store backed by `window.localStorage`.
///
/// Scoped to one browser profile and origin; survives page reloads.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's local storage.
    ///
    /// Fails when there is no window (workers) or when the browser denies
    /// access (privacy modes, disabled storage).
    pub fn open() -> Result<Self, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{:?}", e)))?
            .ok_or_else(|| CacheError::OpenError("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }
}
