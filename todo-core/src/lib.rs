//! Core domain model and persistence for a personal todo list.

pub mod storage;
pub mod todo;

pub use storage::{Storage, StorageError};
pub use todo::{Todo, TodoError, TodoList};
