//! The todo list store handed to the presentation layer.

use crate::config::TodoConfig;
use crate::error::TodoError;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoState};
use todo_store_runtime::{Snapshot, Store};
use tokio::sync::watch;

/// Immutable view of the todo list at a point in time
pub type TodoSnapshot = Snapshot<TodoState>;

/// Owns the todo list for one session
///
/// Every operation returns the snapshot after it ran. Declined operations
/// return the validation error and leave the list untouched; operations on
/// ids that are not in the list return the current snapshot unchanged.
#[derive(Debug)]
pub struct TodoStore {
    inner: Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>,
}

impl TodoStore {
    /// Creates an empty todo list
    #[must_use]
    pub fn new(config: TodoConfig) -> Self {
        Self {
            inner: Store::new(
                TodoState::new(),
                TodoReducer::new(),
                TodoEnvironment::new(config),
            ),
        }
    }

    /// Dispatches any todo action
    ///
    /// # Errors
    ///
    /// Returns the [`TodoError`] if the action is declined.
    pub fn send(&mut self, action: TodoAction) -> Result<TodoSnapshot, TodoError> {
        self.inner.send(action)
    }

    /// Appends a todo with the next id
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::BlankTitle`] for a blank title,
    /// [`TodoError::TitleTooLong`] when over the configured limit and
    /// [`TodoError::IdSpaceExhausted`] once every id has been issued.
    pub fn add_todo(&mut self, title: impl Into<String>) -> Result<TodoSnapshot, TodoError> {
        self.send(TodoAction::add(title))
    }

    /// Removes the todo with `id`, if present
    ///
    /// # Errors
    ///
    /// Never declined; the `Result` matches the other operations.
    pub fn remove_todo(&mut self, id: TodoId) -> Result<TodoSnapshot, TodoError> {
        self.send(TodoAction::remove(id))
    }

    /// Replaces the title of the todo with `id`, if present
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::BlankTitle`] or [`TodoError::TitleTooLong`] when
    /// the new title is invalid, whether or not `id` exists.
    pub fn modify_todo(
        &mut self,
        id: TodoId,
        title: impl Into<String>,
    ) -> Result<TodoSnapshot, TodoError> {
        self.send(TodoAction::modify(id, title))
    }

    /// Returns the current snapshot
    #[must_use]
    pub fn snapshot(&self) -> TodoSnapshot {
        self.inner.snapshot()
    }

    /// Read the current list via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.inner.state(f)
    }

    /// Number of operations that changed the list
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.inner.version()
    }

    /// Configuration this store validates against
    #[must_use]
    pub const fn config(&self) -> &TodoConfig {
        &self.inner.environment().config
    }

    /// Subscribe to snapshots published after each change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoSnapshot> {
        self.inner.subscribe()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(TodoConfig::default())
    }
}
