use crate::{
    config::Config,
    domain::{ListStore, Todo},
    error::Result,
    storage::Storage,
};

/// Reads and writes the whole todo list as one JSON document
pub struct TodoRepository<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TodoRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, config: &Config) -> Self {
        Self::new(storage, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrites the stored list with `todos`, in order
    pub fn save(&self, todos: &[Todo]) -> Result<()> {
        let json = serde_json::to_string(todos)?;
        self.storage.set_item(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = todos.len(), "saved todos");
        Ok(())
    }

    /// Loads the stored list.
    ///
    /// A missing, unreadable or malformed record yields an empty list. Records
    /// with blank text or repeating an earlier id are dropped.
    pub fn load(&self) -> ListStore<Todo> {
        let contents = match self.storage.get_item(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return ListStore::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read todos, starting empty");
                return ListStore::new();
            }
        };

        match serde_json::from_str::<Vec<Todo>>(&contents) {
            Ok(todos) => ListStore::from_items(todos.into_iter().filter(|todo| {
                let keep = !todo.text.trim().is_empty();
                if !keep {
                    tracing::warn!(key = %self.key, id = %todo.id, "dropped todo with blank text");
                }
                keep
            })),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "malformed todos record, starting empty");
                ListStore::new()
            }
        }
    }

    /// Removes the stored record
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}
