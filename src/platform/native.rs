//! Native Platform Implementation
//!
//! Settings live in a JSON object on disk, one string value per key. The
//! file is rewritten whole on every change; it only ever holds a handful of
//! keys.

use super::{KeyValueStore, PlatformError, PlatformResult};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Default state file path (relative to the working directory)
pub const STATE_FILE: &str = ".termfolio/state.json";

/// JSON-file backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> PlatformResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| PlatformError::InitFailed(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PlatformError::Io(format!(
                    "Failed to read state: {}",
                    e
                )));
            }
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> PlatformResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir)
                .map_err(|e| PlatformError::Io(format!("Failed to create dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| PlatformError::Io(format!("Failed to encode state: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| PlatformError::Io(format!("Failed to write state: {}", e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PlatformResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PlatformResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> PlatformResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
