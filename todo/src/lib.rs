//! A todo list kept as an explicit state container.
//!
//! [`TodoStore`] owns an ordered list of todos and the counter that issues
//! their ids. The presentation layer calls [`TodoStore::add_todo`],
//! [`TodoStore::remove_todo`] and [`TodoStore::modify_todo`], and reads or
//! subscribes to immutable snapshots of the list.
//!
//! - Blank titles (after trimming) are declined with [`TodoError::BlankTitle`]
//! - Removing or modifying an id that is not in the list is a no-op
//! - Ids start at 1 and are never reused
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoConfig, TodoError, TodoId, TodoStore};
//!
//! let mut store = TodoStore::new(TodoConfig::default());
//!
//! store.add_todo("Buy milk").unwrap();
//! store.add_todo("Walk dog").unwrap();
//! assert_eq!(store.add_todo("   ").unwrap_err(), TodoError::BlankTitle);
//!
//! let snapshot = store.remove_todo(TodoId::new(1)).unwrap();
//! let titles: Vec<&str> = snapshot.iter().map(|todo| todo.title.as_str()).collect();
//! assert_eq!(titles, ["Walk dog"]);
//!
//! let snapshot = store.add_todo("Water plants").unwrap();
//! assert_eq!(snapshot.last_todo_id(), TodoId::new(3));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use config::TodoConfig;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoSnapshot, TodoStore};
pub use types::{Todo, TodoAction, TodoId, TodoState};
