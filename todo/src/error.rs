//! Reasons the todo list declines an action.

use thiserror::Error;

/// Validation errors for todo actions
///
/// A declined action never changes the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The title is empty or whitespace-only
    #[error("Todo title cannot be empty")]
    BlankTitle,

    /// The title exceeds the configured limit
    #[error("Todo title too long ({len} characters, max {max})")]
    TitleTooLong {
        /// Length of the trimmed title in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Every todo id has been issued
    #[error("No todo ids left to issue")]
    IdSpaceExhausted,
}
