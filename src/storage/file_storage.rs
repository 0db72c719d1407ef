use crate::{
    error::Result,
    storage::{validate_key, Storage},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File-based storage: one document per key under a data directory
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const STORAGE_DIR: &'static str = ".sortlist";
    const FILE_EXTENSION: &'static str = "json";

    /// Creates a storage rooted at `<data_root>/.sortlist`
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_root.as_ref().join(Self::STORAGE_DIR),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn item_file(&self, key: &str) -> PathBuf {
        self.root_path
            .join(format!("{}.{}", key, Self::FILE_EXTENSION))
    }

    fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let file_path = self.item_file(key);

        if !file_path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(file_path)?))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_directory_exists()?;

        // Readers only ever see a complete document
        let file_path = self.item_file(key);
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &file_path)?;

        tracing::debug!(key, path = %file_path.display(), "stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let file_path = self.item_file(key);

        if file_path.exists() {
            fs::remove_file(file_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.get_item("todos").unwrap().is_none());
        assert!(!storage.root_path().exists());
    }

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set_item("todos", r#"[{"id":"1"}]"#).unwrap();

        assert!(storage.item_file("todos").exists());
        assert_eq!(
            storage.get_item("todos").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[test]
    fn test_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set_item("todos", "first").unwrap();
        storage.set_item("todos", "second").unwrap();

        assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("second"));
        assert!(!storage.item_file("todos").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        FileStorage::new(temp_dir.path())
            .set_item("todos", "kept")
            .unwrap();

        let reopened = FileStorage::new(temp_dir.path());
        assert_eq!(reopened.get_item("todos").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set_item("todos", "x").unwrap();
        storage.remove_item("todos").unwrap();
        storage.remove_item("todos").unwrap();

        assert!(storage.get_item("todos").unwrap().is_none());
    }

    #[test]
    fn test_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.set_item("../outside", "x").is_err());
    }
}
