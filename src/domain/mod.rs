pub mod image;
pub mod list;
pub mod todo;

pub use image::{EntryKey, EntryKeyAllocator, ImageEntry};
pub use list::{move_item, moved, Keyed, ListStore};
pub use todo::{Todo, TodoId};
