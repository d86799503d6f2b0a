//! Middleware that emits tracing events around each dispatch.

use super::Middleware;
use crate::core::{Action, State};
use crate::store::{BoxError, Store};

/// Middleware that logs every dispatch through [`tracing`].
///
/// Before the reducer runs, a `debug` event records the incoming action.
/// After the dispatch completes, a second event records the action together
/// with the resulting state. The hooks never fail, so this middleware cannot
/// abort a dispatch.
///
/// Events are emitted at `DEBUG` level under the crate's module path; wire up
/// a `tracing` subscriber to see them:
///
/// ```rust
/// use fluxion::{action_type, state_type, LoggingMiddleware, Store};
///
/// state_type! {
///     pub struct CounterState {
///         pub count: u64,
///     }
/// }
///
/// action_type! {
///     pub enum CounterAction {
///         Increase(u64),
///     }
/// }
///
/// let store = Store::new(CounterState { count: 0 }, |state: &CounterState, action: &CounterAction| {
///     match action {
///         CounterAction::Increase(n) => CounterState { count: state.count + n },
///     }
/// });
///
/// store.add_middleware(LoggingMiddleware::new());
/// store.dispatch(CounterAction::Increase(1)).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    /// Create a logging middleware.
    pub fn new() -> Self {
        Self
    }
}

impl<S: State, A: Action> Middleware<S, A> for LoggingMiddleware {
    fn pre_dispatch(&self, _store: &Store<S, A>, action: &A) -> Result<(), BoxError> {
        tracing::debug!(?action, "dispatching action");
        Ok(())
    }

    fn post_dispatch(&self, store: &Store<S, A>, action: &A) -> Result<(), BoxError> {
        store.read(|state| tracing::debug!(?action, ?state, "action dispatched"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, State};

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: u64,
    }

    impl State for TestState {}

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increase(u64),
    }

    impl Action for TestAction {}

    #[test]
    fn logging_does_not_disturb_dispatch() {
        let store = Store::new(
            TestState { count: 0 },
            |state: &TestState, action: &TestAction| match action {
                TestAction::Increase(n) => TestState {
                    count: state.count + n,
                },
            },
        );

        store.add_middleware(LoggingMiddleware::new());

        store.dispatch(TestAction::Increase(7)).unwrap();
        assert_eq!(store.state().count, 7);
    }

    #[test]
    fn hooks_never_fail() {
        let store = Store::new(
            TestState { count: 0 },
            |state: &TestState, _action: &TestAction| state.clone(),
        );
        let middleware = LoggingMiddleware::new();

        assert!(Middleware::pre_dispatch(&middleware, &store, &TestAction::Increase(1)).is_ok());
        assert!(Middleware::post_dispatch(&middleware, &store, &TestAction::Increase(1)).is_ok());
    }
}
