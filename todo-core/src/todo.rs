use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single task record.
///
/// Field names serialize in PascalCase so that files written by earlier
/// versions of the tool keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("invalid index {index}: list has {len} todos")]
    InvalidIndex { index: usize, len: usize },
}

/// An ordered collection of todos, manipulated by 0-based position.
///
/// Insertion order is the only ordering, and the positional index is the
/// sole identifier of a todo. Indices are not stable across deletions:
/// removing position `i` shifts every later todo down by one.
///
/// Serializes transparently as a JSON array of its todos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Appends a new incomplete todo with `created_at` set to now.
    pub fn add(&mut self, title: String) {
        self.todos.push(Todo {
            title,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        });
    }

    /// Checks that `index` refers to an existing todo.
    ///
    /// Every fallible operation runs this guard before touching the list,
    /// so a failed call never leaves a partial mutation behind.
    pub fn validate_index(&self, index: usize) -> Result<(), TodoError> {
        if index >= self.todos.len() {
            return Err(TodoError::InvalidIndex {
                index,
                len: self.todos.len(),
            });
        }
        Ok(())
    }

    /// Replaces the title of the todo at `index`, leaving every other
    /// field unchanged.
    pub fn edit(&mut self, index: usize, title: String) -> Result<(), TodoError> {
        self.validate_index(index)?;
        self.todos[index].title = title;
        Ok(())
    }

    /// Flips the completion state of the todo at `index`.
    ///
    /// Completing a todo stamps `completed_at` with the current time;
    /// un-completing it clears the stamp again, so `completed_at` is
    /// present exactly when `completed` is true.
    pub fn toggle(&mut self, index: usize) -> Result<(), TodoError> {
        self.validate_index(index)?;
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        todo.completed_at = if todo.completed { Some(Utc::now()) } else { None };
        Ok(())
    }

    /// Removes the todo at `index`, shifting all later todos one
    /// position earlier.
    pub fn delete(&mut self, index: usize) -> Result<(), TodoError> {
        self.validate_index(index)?;
        self.todos.remove(index);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
