//! In-process key-value storage.

use crate::storage::error::PersistenceError;
use crate::storage::KeyValueStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Map-backed [`KeyValueStore`].
///
/// Clones share the same slots, so a store handed to one calculator can be
/// handed to the next to simulate reloading a page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.slots.borrow_mut().remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError> {
        self.slots.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
