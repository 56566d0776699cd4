//! Configuration for the todo list.
//!
//! Loads configuration from environment variables with permissive defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Todo list configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Maximum title length in characters, counted after trimming
    ///
    /// `None` accepts any non-blank title.
    pub max_title_chars: Option<usize>,
}

impl TodoConfig {
    /// Environment variable holding [`TodoConfig::max_title_chars`]
    pub const MAX_TITLE_CHARS_VAR: &'static str = "TODO_MAX_TITLE_CHARS";

    /// Create a configuration with no title limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_title_chars: None,
        }
    }

    /// Set the maximum title length
    #[must_use]
    pub const fn with_max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = Some(max);
        self
    }

    /// Load configuration from environment variables.
    ///
    /// - `TODO_MAX_TITLE_CHARS`: title limit; unset, empty, `0` or
    ///   unparsable values mean no limit
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Same rules as [`TodoConfig::from_env`].
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_title_chars: lookup(Self::MAX_TITLE_CHARS_VAR)
                .and_then(|s| s.trim().parse().ok())
                .filter(|&max: &usize| max > 0),
        }
    }
}
