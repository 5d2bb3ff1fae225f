//! Browser Platform Implementation
//!
//! Settings go to `window.localStorage`. Private browsing modes may refuse
//! access; callers get `NotSupported` and fall back to `MemoryStore`.

use super::{KeyValueStore, PlatformError, PlatformResult};

/// `localStorage` backed store
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> PlatformResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| PlatformError::InitFailed("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| PlatformError::NotSupported(format!("localStorage: {:?}", e)))?
            .ok_or_else(|| PlatformError::NotSupported("localStorage".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> PlatformResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| PlatformError::Io(format!("getItem {}: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> PlatformResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PlatformError::Io(format!("setItem {}: {:?}", key, e)))
    }

    fn remove(&mut self, key: &str) -> PlatformResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| PlatformError::Io(format!("removeItem {}: {:?}", key, e)))
    }
}
