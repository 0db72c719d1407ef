//! Headless state for the two views. A UI shell forwards user input here and
//! renders from the exposed state.

pub mod image_sorter;
pub mod todo_list;

pub use image_sorter::ImageSorter;
pub use todo_list::TodoList;
