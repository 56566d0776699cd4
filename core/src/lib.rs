//! # Todo Store Core
//!
//! Core traits and types for the todo store architecture.
//!
//! This crate provides the seam between business logic and the runtime that
//! owns state: the [`Reducer`](reducer::Reducer) trait and the
//! [`Outcome`](outcome::Outcome) a reducer reports for every action.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: `(State, Action, Environment) → Outcome`, mutating state in place
//! - **Outcome**: Whether the action changed state, was a no-op, or was declined
//! - **Environment**: Injected configuration and dependencies
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{outcome::Outcome, reducer::Reducer};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: u32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = &'static str;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Outcome<&'static str> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 Outcome::Applied
//!             }
//!             CounterAction::Decrement if state.count == 0 => Outcome::Unchanged,
//!             CounterAction::Decrement => {
//!                 state.count -= 1;
//!                 Outcome::Applied
//!             }
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! assert!(CounterReducer.reduce(&mut state, CounterAction::Increment, &()).is_applied());
//! assert_eq!(state.count, 1);
//! ```

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic functions: `(State, Action, Environment) → Outcome`.
/// They hold all business logic and never perform I/O.
pub mod reducer {
    use super::outcome::Outcome;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected configuration this reducer reads
    /// - `Error`: Why an action may be declined
    ///
    /// # Contract
    ///
    /// A reducer returning [`Outcome::Declined`] or [`Outcome::Unchanged`] must
    /// leave the state observably as it found it. Runtimes additionally
    /// discard the working copy of a declined action, so a reducer may
    /// validate after partially preparing a change.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected configuration
        type Environment;

        /// The validation error reported when an action is declined
        type Error;

        /// Reduce an action into a state change
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected configuration
        ///
        /// # Returns
        ///
        /// The [`Outcome`] describing what happened to the state
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Outcome<Self::Error>;
    }
}

/// Outcome module - What a reducer did with an action
pub mod outcome {
    /// The verdict of a reducer on a single action
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[must_use]
    pub enum Outcome<E> {
        /// State changed; a new snapshot should be published
        Applied,

        /// Nothing to do (e.g. the target does not exist)
        Unchanged,

        /// The action failed validation; state must not change
        Declined(E),
    }

    impl<E> Outcome<E> {
        /// Returns true if the action changed state
        #[must_use]
        pub const fn is_applied(&self) -> bool {
            matches!(self, Self::Applied)
        }

        /// Returns true if the action was a no-op
        #[must_use]
        pub const fn is_unchanged(&self) -> bool {
            matches!(self, Self::Unchanged)
        }

        /// Returns true if the action was declined
        #[must_use]
        pub const fn is_declined(&self) -> bool {
            matches!(self, Self::Declined(_))
        }

        /// Returns the decline reason, if any
        #[must_use]
        pub const fn error(&self) -> Option<&E> {
            match self {
                Self::Declined(error) => Some(error),
                Self::Applied | Self::Unchanged => None,
            }
        }

        /// Converts into a `Result`, mapping `Applied` to `true` and
        /// `Unchanged` to `false`
        ///
        /// # Errors
        ///
        /// Returns the decline reason for [`Outcome::Declined`].
        pub fn into_result(self) -> Result<bool, E> {
            match self {
                Self::Applied => Ok(true),
                Self::Unchanged => Ok(false),
                Self::Declined(error) => Err(error),
            }
        }
    }

    impl<E> From<Result<(), E>> for Outcome<E> {
        fn from(result: Result<(), E>) -> Self {
            match result {
                Ok(()) => Self::Applied,
                Err(error) => Self::Declined(error),
            }
        }
    }
}
