//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::RwLock;

use stylebook_core::error::{Result, StylebookError};
use stylebook_core::history::KeyValueStore;

/// Key-value store held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StylebookError::data_access(format!("Store lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StylebookError::data_access(format!("Store lock poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StylebookError::data_access(format!("Store lock poisoned: {}", e)))?;
        entries.remove(key);
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String>,
    ) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StylebookError::data_access(format!("Store lock poisoned: {}", e)))?;
        let updated = f(entries.get(key).cloned())?;
        entries.insert(key.to_string(), updated);
        Ok(())
    }
}
