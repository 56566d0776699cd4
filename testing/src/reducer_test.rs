//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todo_store_core::{outcome::Outcome, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for outcome assertion functions
type OutcomeAssertion<E> = Box<dyn FnOnce(&Outcome<E>)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// `given_actions` replays setup actions through the reducer before the
/// action under test, so states can be built the same way a store would
/// build them.
///
/// # Example
///
/// ```ignore
/// use todo_store_testing::{assertions, ReducerTest};
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(TodoEnvironment::default())
///     .given_state(TodoState::new())
///     .given_actions([TodoAction::add("Buy milk")])
///     .when_action(TodoAction::remove(TodoId::new(1)))
///     .then_state(|state| {
///         assert!(state.is_empty());
///     })
///     .then_outcome(assertions::assert_applied)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    setup_actions: Vec<A>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    outcome_assertions: Vec<OutcomeAssertion<R::Error>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            setup_actions: Vec::new(),
            action: None,
            state_assertions: Vec::new(),
            outcome_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Replay actions on the initial state before the action under test (Given)
    ///
    /// Their outcomes are not asserted.
    #[must_use]
    pub fn given_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.setup_actions.extend(actions);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the reducer's outcome (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Outcome<R::Error>) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        for setup in self.setup_actions {
            let _ = self.reducer.reduce(&mut state, setup, &env);
        }

        // Execute reducer
        let outcome = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run outcome assertions
        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }
    }
}

/// Helper assertions for outcomes
pub mod assertions {
    use todo_store_core::outcome::Outcome;

    /// Assert that the action changed state
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Applied`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_applied<E: std::fmt::Debug>(outcome: &Outcome<E>) {
        assert!(
            outcome.is_applied(),
            "Expected action to be applied, but got {outcome:?}"
        );
    }

    /// Assert that the action was a no-op
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Unchanged`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged<E: std::fmt::Debug>(outcome: &Outcome<E>) {
        assert!(
            outcome.is_unchanged(),
            "Expected action to leave state unchanged, but got {outcome:?}"
        );
    }

    /// Assert that the action was declined, for any reason
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Declined`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_declined<E: std::fmt::Debug>(outcome: &Outcome<E>) {
        assert!(
            outcome.is_declined(),
            "Expected action to be declined, but got {outcome:?}"
        );
    }

    /// Assert that the action was declined with the given error
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Declined(expected)`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_declined_with<E>(outcome: &Outcome<E>, expected: &E)
    where
        E: std::fmt::Debug + PartialEq,
    {
        assert_eq!(
            outcome.error(),
            Some(expected),
            "Expected action to be declined with {expected:?}, but got {outcome:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    struct TestReducer;

    struct TestEnv {
        floor: i32,
    }

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;
        type Error = String;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Outcome<Self::Error> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    Outcome::Applied
                },
                TestAction::Decrement if state.count <= env.floor => {
                    Outcome::Declined(format!("cannot go below {}", env.floor))
                },
                TestAction::Decrement => {
                    state.count -= 1;
                    Outcome::Applied
                },
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv { floor: 0 })
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_outcome(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_reducer_test_given_actions() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv { floor: 0 })
            .given_state(TestState { count: 0 })
            .given_actions([TestAction::Increment, TestAction::Increment])
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_declined() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv { floor: 0 })
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 0);
            })
            .then_outcome(|outcome| {
                assertions::assert_declined(outcome);
                assertions::assert_declined_with(outcome, &"cannot go below 0".to_string());
            })
            .run();
    }

    #[test]
    fn test_assertions_unchanged() {
        assertions::assert_unchanged::<String>(&Outcome::Unchanged);
    }

    #[test]
    #[should_panic(expected = "Expected action to be applied")]
    fn test_assert_applied_rejects_declined() {
        assertions::assert_applied(&Outcome::Declined("nope"));
    }
}
