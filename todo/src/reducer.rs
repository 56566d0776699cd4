//! Reducer logic for the todo list.
//!
//! Validates each action against the current list and applies it in place.
//! Blank titles are declined; actions aimed at ids that are not in the list
//! are no-ops.

use crate::config::TodoConfig;
use crate::error::TodoError;
use crate::types::{Todo, TodoAction, TodoId, TodoState};
use todo_store_core::{outcome::Outcome, reducer::Reducer};

/// Environment for the todo reducer
#[derive(Clone, Debug, Default)]
pub struct TodoEnvironment {
    /// Validation settings
    pub config: TodoConfig,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(config: TodoConfig) -> Self {
        Self { config }
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a title, returning the trimmed form to store
    fn validate_title(title: &str, config: &TodoConfig) -> Result<String, TodoError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(TodoError::BlankTitle);
        }

        if let Some(max) = config.max_title_chars {
            let len = title.chars().count();
            if len > max {
                return Err(TodoError::TitleTooLong { len, max });
            }
        }

        Ok(title.to_string())
    }

    fn add_todo(state: &mut TodoState, title: &str, env: &TodoEnvironment) -> Outcome<TodoError> {
        let title = match Self::validate_title(title, &env.config) {
            Ok(title) => title,
            Err(error) => return Outcome::Declined(error),
        };

        let Some(id) = state.last_todo_id.next() else {
            return Outcome::Declined(TodoError::IdSpaceExhausted);
        };

        state.todos.push(Todo::new(id, title));
        state.last_todo_id = id;
        Outcome::Applied
    }

    fn remove_todo(state: &mut TodoState, id: TodoId) -> Outcome<TodoError> {
        match state.position(id) {
            Some(index) => {
                state.todos.remove(index);
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        }
    }

    fn modify_todo(
        state: &mut TodoState,
        id: TodoId,
        title: &str,
        env: &TodoEnvironment,
    ) -> Outcome<TodoError> {
        // Title is validated first: a blank edit is declined even for unknown ids
        let title = match Self::validate_title(title, &env.config) {
            Ok(title) => title,
            Err(error) => return Outcome::Declined(error),
        };

        let Some(index) = state.position(id) else {
            return Outcome::Unchanged;
        };

        let todo = &mut state.todos[index];
        if todo.title == title {
            return Outcome::Unchanged;
        }

        todo.title = title;
        Outcome::Applied
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Outcome<Self::Error> {
        match action {
            TodoAction::AddTodo { title } => Self::add_todo(state, &title, env),
            TodoAction::RemoveTodo { id } => Self::remove_todo(state, id),
            TodoAction::ModifyTodo { id, title } => Self::modify_todo(state, id, &title, env),
        }
    }
}
