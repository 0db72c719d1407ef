//! # Sortlist Core
//!
//! Headless core for two list views: an image URL sorter that imports and
//! exports plain-text URL lists, and a todo list persisted to a key-value
//! store. Both reorder items by drag-and-drop through the same move
//! operation, driven by pointer or keyboard input.
//!
//! Nothing here renders; a UI shell forwards input and draws from the
//! exposed state.

pub mod config;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod storage;
pub mod transfer;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use dnd::{KeyCommand, MoveIntent, PointerEvent, ReorderSource};
pub use domain::{
    image::{EntryKey, ImageEntry},
    list::{move_item, Keyed, ListStore},
    todo::{Todo, TodoId},
};
pub use error::{Result, SortlistError};
pub use storage::{MemoryStorage, Storage, TodoRepository};
pub use view::{ImageSorter, TodoList};
