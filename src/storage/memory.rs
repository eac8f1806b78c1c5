use super::{SessionStorage, StorageError};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local storage. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the storage, e.g. to simulate a marker left by a previous run.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
