//! Platform Abstraction Layer
//!
//! Small key-value persistence for settings, implemented per host:
//!
//! - Browser: `localStorage` (web.rs)
//! - Native: a JSON state file (native.rs)
//! - Anywhere: an in-memory map, used by tests and as a fallback
//!
//! The shell and terminal model are platform-agnostic. Only these stores
//! know where data actually lives.

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Platform-specific errors
#[derive(Debug, Clone)]
pub enum PlatformError {
    /// I/O error
    Io(String),
    /// Feature not supported on this platform
    NotSupported(String),
    /// Initialization failed
    InitFailed(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Io(s) => write!(f, "I/O error: {}", s),
            PlatformError::NotSupported(s) => write!(f, "Not supported: {}", s),
            PlatformError::InitFailed(s) => write!(f, "Init failed: {}", s),
        }
    }
}

impl std::error::Error for PlatformError {}

/// String key-value persistence
pub trait KeyValueStore {
    /// Read a value. Ok(None) if the key is absent.
    fn get(&self, key: &str) -> PlatformResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> PlatformResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> PlatformResult<()>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PlatformResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PlatformResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PlatformResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::NotSupported("localStorage".into());
        assert_eq!(err.to_string(), "Not supported: localStorage");
    }
}
