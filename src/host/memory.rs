//! In-memory storage and document.
//!
//! Both types are handles over shared state: clone one, hand the clone to a
//! [`Host`](super::Host), and keep the original to observe what the store did.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{DocumentStyleController, PreferenceStorage};
use crate::error::StorageError;

/// A string key-value store held in memory.
///
/// Reads and writes can be made to fail, to stand in for disabled or
/// over-quota browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one value already present.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Returns the current value under `key`, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A document root whose class list lives in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    /// Returns the class list, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl DocumentStyleController for MemoryDocument {
    fn add_class(&mut self, name: &str) {
        self.classes.borrow_mut().insert(name.to_string());
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.borrow_mut().remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        MemoryDocument::has_class(self, name)
    }
}
