//! History persistence.
//!
//! The engine talks to a [`HistoryStore`]. The usual store is a
//! [`KeyedHistoryStore`], which keeps the whole history as one JSON payload
//! under a single key of a string key-value facility ([`KeyValueStore`]),
//! the same way a browser page keeps it in `localStorage`.

use crate::core::HistoryEntry;

pub mod error;
pub mod file;
pub mod memory;
pub mod record;

pub use error::{PersistenceError, RecordViolation};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::StoredRecord;

/// Key under which history is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "calcHistory";

/// Source and sink of persisted history.
pub trait HistoryStore {
    /// Load previously saved entries; no saved data yields an empty list.
    fn load(&self) -> Result<Vec<HistoryEntry>, PersistenceError>;

    /// Replace the saved entries with `entries`.
    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), PersistenceError>;

    /// Move to a different storage key. Stores without keys ignore it.
    fn rekey(&mut self, _key: &str) {}
}

/// String key-value storage facility.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError>;
}

/// History kept as a JSON payload under one key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct KeyedHistoryStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> KeyedHistoryStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Store under [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: KeyValueStore> HistoryStore for KeyedHistoryStore<B> {
    fn load(&self) -> Result<Vec<HistoryEntry>, PersistenceError> {
        match self.backend.get(&self.key)? {
            Some(payload) => record::decode(&payload),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), PersistenceError> {
        let payload = record::encode(entries)?;
        self.backend.set(&self.key, payload)
    }

    fn rekey(&mut self, key: &str) {
        self.key = key.to_string();
    }
}

/// Store that keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHistory;

impl HistoryStore for NullHistory {
    fn load(&self) -> Result<Vec<HistoryEntry>, PersistenceError> {
        Ok(Vec::new())
    }

    fn save(&mut self, _entries: &[HistoryEntry]) -> Result<(), PersistenceError> {
        Ok(())
    }
}
