use crate::{
    error::{Result, SortlistError},
    storage::{validate_key, Storage},
};
use std::{collections::HashMap, sync::Mutex};

/// In-memory storage; contents last as long as the value does
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SortlistError::StorageError("memory storage lock poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();

        assert!(storage.get_item("todos").unwrap().is_none());

        storage.set_item("todos", "one").unwrap();
        storage.set_item("todos", "two").unwrap();
        assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("two"));

        storage.remove_item("todos").unwrap();
        storage.remove_item("todos").unwrap();
        assert!(storage.get_item("todos").unwrap().is_none());
    }

    #[test]
    fn test_rejects_invalid_key() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.set_item("a/b", "x"),
            Err(SortlistError::InvalidStorageKey(_))
        ));
    }
}
