//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items plus the counter that
//! issues their ids. Ids are never reused, even after the todo holding one is
//! removed.

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a todo item
///
/// Ids are issued sequentially starting at 1; `TodoId::default()` (0) means
/// "no id issued yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id following this one, or `None` on overflow
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, fixed once assigned
    pub id: TodoId,
    /// Title of the todo (trimmed, never blank)
    pub title: String,
}

impl Todo {
    /// Creates a new todo item
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// State of the todo list
///
/// Only the reducer mutates it, which keeps these invariants:
/// - ids are unique and strictly increasing in list order
/// - titles are trimmed and never blank
/// - `last_todo_id` is at least every id ever issued
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    pub(crate) todos: Vec<Todo>,
    pub(crate) last_todo_id: TodoId,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            last_todo_id: TodoId(0),
        }
    }

    /// Returns the todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Iterates over the todos in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the last id issued (0 if none yet)
    #[must_use]
    pub const fn last_todo_id(&self) -> TodoId {
        self.last_todo_id
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.position(id).map(|index| &self.todos[index])
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the todo with `id` in the list
    pub(crate) fn position(&self, id: TodoId) -> Option<usize> {
        // ids are strictly increasing in list order
        self.todos.binary_search_by_key(&id, |todo| todo.id).ok()
    }
}

impl<'a> IntoIterator for &'a TodoState {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Actions the todo list accepts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo with the next id
    AddTodo {
        /// Title of the todo (trimmed before storing)
        title: String,
    },

    /// Remove a todo; unknown ids are ignored
    RemoveTodo {
        /// Todo to remove
        id: TodoId,
    },

    /// Replace a todo's title in place; unknown ids are ignored
    ModifyTodo {
        /// Todo to modify
        id: TodoId,
        /// New title (trimmed before storing)
        title: String,
    },
}

impl TodoAction {
    /// Shorthand for [`TodoAction::AddTodo`]
    #[must_use]
    pub fn add(title: impl Into<String>) -> Self {
        Self::AddTodo {
            title: title.into(),
        }
    }

    /// Shorthand for [`TodoAction::RemoveTodo`]
    #[must_use]
    pub const fn remove(id: TodoId) -> Self {
        Self::RemoveTodo { id }
    }

    /// Shorthand for [`TodoAction::ModifyTodo`]
    #[must_use]
    pub fn modify(id: TodoId, title: impl Into<String>) -> Self {
        Self::ModifyTodo {
            id,
            title: title.into(),
        }
    }
}
