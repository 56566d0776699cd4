//! # Todo Store Runtime
//!
//! Runtime implementation for the todo store architecture.
//!
//! This crate provides the [`Store`] that owns state, runs the reducer for
//! each action and publishes immutable [`Snapshot`]s of the result.
//!
//! ## Core Components
//!
//! - **Store**: Single-writer owner of state, reducer and environment
//! - **Snapshot**: Versioned, immutable view of state handed to readers
//! - **Subscription**: `tokio::sync::watch` channel carrying the latest snapshot
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{outcome::Outcome, reducer::Reducer};
//! use todo_store_runtime::Store;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Names(Vec<String>);
//!
//! struct NamesReducer;
//!
//! impl Reducer for NamesReducer {
//!     type State = Names;
//!     type Action = String;
//!     type Environment = ();
//!     type Error = String;
//!
//!     fn reduce(&self, state: &mut Names, name: String, _env: &()) -> Outcome<String> {
//!         if name.is_empty() {
//!             return Outcome::Declined("empty name".to_string());
//!         }
//!         state.0.push(name);
//!         Outcome::Applied
//!     }
//! }
//!
//! let mut store = Store::new(Names::default(), NamesReducer, ());
//! let snapshot = store.send("Ada".to_string()).unwrap();
//! assert_eq!(snapshot.version(), 1);
//! assert!(store.send(String::new()).is_err());
//! assert_eq!(store.state(|names| names.0.len()), 1);
//! ```

use todo_store_core::{outcome::Outcome, reducer::Reducer};
use std::sync::Arc;

/// Immutable, versioned views of store state
pub mod snapshot;

pub use snapshot::Snapshot;
pub use store::Store;

/// Store module - The runtime for a reducer
pub mod store {
    use super::{Arc, Outcome, Reducer, Snapshot};
    use tokio::sync::watch;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind an `Arc`, shared with the snapshots handed out)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected configuration)
    /// 4. Snapshot publication to subscribers
    ///
    /// Every mutating call takes `&mut self`, so there is exactly one writer.
    /// Each action is reduced against a private copy of the current state;
    /// only an [`Outcome::Applied`] copy replaces the state, so snapshots
    /// already handed out never change.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<S>,
        version: u64,
        reducer: R,
        environment: E,
        snapshots: watch::Sender<Snapshot<S>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The initial state is published as version 0.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let state = Arc::new(initial_state);
            let (snapshots, _) = watch::channel(Snapshot::new(0, Arc::clone(&state)));

            Self {
                state,
                version: 0,
                reducer,
                environment,
                snapshots,
            }
        }

        /// Send an action through the reducer
        ///
        /// # Returns
        ///
        /// The snapshot after the action. For an applied action this is a new
        /// snapshot, which is also published to subscribers; for a no-op it is
        /// the current snapshot.
        ///
        /// # Errors
        ///
        /// Returns the reducer's error when it declines the action. The state,
        /// version and published snapshot are left untouched.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<Snapshot<S>, R::Error>
        where
            R::Error: std::fmt::Display,
        {
            metrics::counter!("store.actions.total").increment(1);

            let mut next = S::clone(&self.state);
            let outcome = {
                let span = tracing::trace_span!("reducer_execution");
                let _enter = span.enter();
                self.reducer.reduce(&mut next, action, &self.environment)
            };

            match outcome {
                Outcome::Applied => {
                    self.version += 1;
                    self.state = Arc::new(next);

                    let snapshot = self.snapshot();
                    self.snapshots.send_replace(snapshot.clone());

                    // Precision loss acceptable for metrics
                    #[allow(clippy::cast_precision_loss)]
                    metrics::gauge!("store.snapshot.version").set(self.version as f64);
                    tracing::debug!(version = self.version, "Action applied, snapshot published");

                    Ok(snapshot)
                },
                Outcome::Unchanged => {
                    metrics::counter!("store.actions.unchanged").increment(1);
                    tracing::debug!(version = self.version, "Action left state unchanged");
                    Ok(self.snapshot())
                },
                Outcome::Declined(error) => {
                    metrics::counter!("store.actions.declined").increment(1);
                    tracing::debug!(%error, "Action declined");
                    Err(error)
                },
            }
        }

        /// Returns the current snapshot
        #[must_use]
        pub fn snapshot(&self) -> Snapshot<S> {
            Snapshot::new(self.version, Arc::clone(&self.state))
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.count());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Number of applied actions since the store was created
        #[must_use]
        pub const fn version(&self) -> u64 {
            self.version
        }

        /// Returns the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// Subscribe to published snapshots
        ///
        /// The receiver immediately holds the current snapshot and is
        /// notified each time an action is applied. Intermediate snapshots
        /// may be skipped by a slow subscriber; the latest one is always
        /// available.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Snapshot<S>> {
            self.snapshots.subscribe()
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("version", &self.version)
                .field("state", &self.state)
                .finish_non_exhaustive()
        }
    }
}
