use crate::{
    config::Config,
    dnd::{apply_intent, KeyCommand, KeyboardSensor, MoveIntent, PointerEvent, PointerSensor, ReorderSource},
    domain::{ListStore, Todo, TodoId},
    error::Result,
    storage::{Storage, TodoRepository},
};

/// Persistent todo list.
///
/// Every operation that changes the list writes the whole list back through
/// the repository before returning. No-ops do not write. When a write fails
/// the in-memory change is kept and the error is returned.
pub struct TodoList<S> {
    list: ListStore<Todo>,
    repository: TodoRepository<S>,
    pointer: PointerSensor<TodoId>,
    keyboard: KeyboardSensor<TodoId>,
}

impl<S: Storage> TodoList<S> {
    /// Loads the stored list from `storage`, starting empty if there is none
    pub fn mount(storage: S, config: &Config) -> Self {
        let repository = TodoRepository::from_config(storage, config);
        let list = repository.load();
        tracing::info!(key = repository.key(), count = list.len(), "mounted todo list");
        Self {
            list,
            repository,
            pointer: PointerSensor::from_config(config),
            keyboard: KeyboardSensor::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        self.list.items()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.list.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.list.iter().filter(|todo| todo.completed).count()
    }

    pub fn repository(&self) -> &TodoRepository<S> {
        &self.repository
    }

    pub fn pointer(&self) -> &PointerSensor<TodoId> {
        &self.pointer
    }

    pub fn keyboard(&self) -> &KeyboardSensor<TodoId> {
        &self.keyboard
    }

    /// Appends a new open todo. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoId>> {
        let Some(todo) = Todo::new(text) else {
            return Ok(None);
        };
        let id = todo.id.clone();
        self.list.push(todo);
        tracing::debug!(id = %id, "added todo");
        self.persist()?;
        Ok(Some(id))
    }

    /// Flips the completion flag of `id`
    pub fn toggle(&mut self, id: &TodoId) -> Result<bool> {
        if !self.list.update(id, Todo::toggle) {
            return Ok(false);
        }
        tracing::debug!(id = %id, "toggled todo");
        self.persist()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: &TodoId) -> Result<bool> {
        if self.list.remove(id).is_none() {
            return Ok(false);
        }
        tracing::debug!(id = %id, "deleted todo");
        self.persist()?;
        Ok(true)
    }

    /// Removes every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.list.retain(|todo| !todo.completed);
        if removed > 0 {
            tracing::debug!(removed, "cleared completed todos");
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<bool> {
        if !self.list.move_item(from, to) {
            return Ok(false);
        }
        tracing::debug!(from, to, "moved todo");
        self.persist()?;
        Ok(true)
    }

    /// Feeds a pointer event; returns `true` if it completed a reorder
    pub fn handle_pointer(&mut self, event: PointerEvent<TodoId>) -> Result<bool> {
        match self.pointer.handle(event) {
            Some(intent) => self.apply(intent),
            None => Ok(false),
        }
    }

    /// Feeds a keyboard command; returns `true` if it moved an item
    pub fn handle_key(&mut self, command: KeyCommand<TodoId>) -> Result<bool> {
        match self.keyboard.handle(command) {
            Some(intent) => self.apply(intent),
            None => Ok(false),
        }
    }

    fn apply(&mut self, intent: MoveIntent<TodoId>) -> Result<bool> {
        if !apply_intent(&mut self.list, &intent) {
            return Ok(false);
        }
        tracing::debug!(?intent, "reordered todo");
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        self.repository.save(self.list.items())
    }
}
