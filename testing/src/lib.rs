//! # Todo Store Testing
//!
//! Testing utilities and helpers for the todo store architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder that drives a reducer directly
//! - Assertion helpers for reducer [`Outcome`](todo_store_core::outcome::Outcome)s
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn blank_title_is_declined() {
//!     ReducerTest::new(TodoReducer::new())
//!         .with_env(TodoEnvironment::default())
//!         .given_state(TodoState::new())
//!         .when_action(TodoAction::add("   "))
//!         .then_state(|state| assert!(state.is_empty()))
//!         .then_outcome(assertions::assert_declined)
//!         .run();
//! }
//! ```

/// Given-When-Then reducer tests
pub mod reducer_test;

// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
