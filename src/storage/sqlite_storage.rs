use crate::{
    error::{Result, SortlistError},
    storage::{validate_key, Storage},
};
use rusqlite::{params, Connection, OptionalExtension};
use std::{path::Path, sync::Mutex};

/// SQLite-based storage: one row per key in a single table
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `database_path`
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(database_path).map_err(storage_error)?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(storage_error)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SortlistError::StorageError("sqlite connection lock poisoned".to_string()))
    }
}

fn storage_error(e: rusqlite::Error) -> SortlistError {
    SortlistError::StorageError(e.to_string())
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(storage_error)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let conn = self.lock()?;
        conn.execute("DELETE FROM local_storage WHERE key = ?1", params![key])
            .map_err(storage_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let storage = SqliteStorage::open_in_memory().unwrap();

        assert!(storage.get_item("todos").unwrap().is_none());

        storage.set_item("todos", "first").unwrap();
        storage.set_item("todos", "second").unwrap();
        assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("second"));

        storage.remove_item("todos").unwrap();
        assert!(storage.get_item("todos").unwrap().is_none());
    }

    #[test]
    fn test_persists_across_connections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.db");

        SqliteStorage::open(&path)
            .unwrap()
            .set_item("todos", "kept")
            .unwrap();

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("todos").unwrap().as_deref(), Some("kept"));
    }
}
