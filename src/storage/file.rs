//! File-backed key-value storage.
//!
//! All keys live in one JSON object file. Writes go to a temporary file
//! that is renamed over the original, so a crash never leaves a half
//! written store behind.

use crate::storage::error::PersistenceError;
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// [`KeyValueStore`] persisted to a JSON file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self, key: &str) -> Result<BTreeMap<String, String>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(PersistenceError::ReadFailed {
                    key: key.to_string(),
                    reason: format!("{}: {e}", self.path.display()),
                })
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            PersistenceError::Malformed(format!("{}: {e}", self.path.display()))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.read_slots(key)?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError> {
        let write_failed = |reason: String| PersistenceError::WriteFailed {
            key: key.to_string(),
            reason,
        };

        let mut slots = match self.read_slots(key) {
            Ok(slots) => slots,
            Err(PersistenceError::Malformed(reason)) => {
                warn!(%reason, "replacing unreadable store file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        slots.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&slots)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }

        // Atomic write: write to temp file, then rename
        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        fs::write(&temp_path, json).map_err(|e| write_failed(e.to_string()))?;
        fs::rename(&temp_path, &self.path).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }
}
