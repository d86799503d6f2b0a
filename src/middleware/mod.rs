//! Middleware: cross-cutting hooks wrapped around each dispatch.
//!
//! A middleware contributes a pair of hooks, `pre_dispatch` and
//! `post_dispatch`, that bracket the raw reduce step. Composition nests
//! middleware like function calls: for registration order m1, m2, m3 a
//! dispatch runs
//!
//! ```text
//! m1.pre -> m2.pre -> m3.pre -> reduce -> m3.post -> m2.post -> m1.post
//! ```
//!
//! so the first-registered middleware is outermost. Hooks observe the store
//! and the action; they must not alter the reduction result, only wrap it.
//!
//! Two implementations ship with the crate: [`LoggingMiddleware`] emits
//! tracing events, and [`DispatchJournal`] records a timestamped log of
//! dispatched actions.

mod journal;
mod logging;

pub use journal::{DispatchJournal, DispatchRecord};
pub use logging::LoggingMiddleware;

use crate::core::{Action, State};
use crate::store::{BoxError, Store, StoreError};
use std::sync::Arc;

/// The store's composed dispatch pipeline.
///
/// Initially "apply the reducer and store the result"; every middleware
/// registration recomposes it with [`wrap`].
pub type DispatchFn<S, A> = Arc<dyn Fn(&Store<S, A>, &A) -> Result<(), StoreError> + Send + Sync>;

/// Cross-cutting hook pair wrapped around the dispatch pipeline.
///
/// Both hooks default to `Ok(())`, so an implementation may override only the
/// side it cares about. Hooks receive the owning store, which allows state
/// inspection before and after the wrapped step via
/// [`Store::read`](crate::Store::read) or [`Store::state`](crate::Store::state).
/// Dispatching from a hook is rejected by the store's reentrancy guard.
///
/// Returning an `Err` short-circuits the rest of the pipeline: an error from
/// `pre_dispatch` aborts before the reducer runs, an error from
/// `post_dispatch` aborts after the state update (which remains in place).
/// Either way the error reaches the `dispatch` caller as
/// [`StoreError::Middleware`] and subscriber notification is skipped.
///
/// # Example
///
/// ```rust
/// use fluxion::{action_type, state_type, BoxError, Middleware, Store};
///
/// state_type! {
///     pub struct Flag {
///         pub set: bool,
///     }
/// }
///
/// action_type! {
///     pub enum FlagAction {
///         Set,
///     }
/// }
///
/// struct RejectWhenSet;
///
/// impl Middleware<Flag, FlagAction> for RejectWhenSet {
///     fn pre_dispatch(&self, store: &Store<Flag, FlagAction>, _action: &FlagAction) -> Result<(), BoxError> {
///         if store.read(|state| state.set) {
///             return Err("flag is already set".into());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Middleware<S: State, A: Action>: Send + Sync {
    /// Called before the wrapped dispatch step runs.
    fn pre_dispatch(&self, store: &Store<S, A>, action: &A) -> Result<(), BoxError> {
        let _ = (store, action);
        Ok(())
    }

    /// Called after the wrapped dispatch step completed.
    fn post_dispatch(&self, store: &Store<S, A>, action: &A) -> Result<(), BoxError> {
        let _ = (store, action);
        Ok(())
    }
}

/// Compose a middleware around an existing dispatch function.
///
/// The returned function runs the middleware's `pre_dispatch`, then `next`,
/// then its `post_dispatch`, failing fast at each step. Repeated wrapping
/// produces the nesting documented at the [module level](self).
pub fn wrap<S: State, A: Action>(
    middleware: Arc<dyn Middleware<S, A>>,
    next: DispatchFn<S, A>,
) -> DispatchFn<S, A> {
    Arc::new(move |store, action| {
        middleware.pre_dispatch(store, action)?;
        next(store, action)?;
        middleware.post_dispatch(store, action)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

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

    fn test_store() -> Store<TestState, TestAction> {
        Store::new(
            TestState { count: 0 },
            |state: &TestState, action: &TestAction| match action {
                TestAction::Increase(n) => TestState {
                    count: state.count + n,
                },
            },
        )
    }

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Middleware<TestState, TestAction> for Recording {
        fn pre_dispatch(
            &self,
            _store: &Store<TestState, TestAction>,
            _action: &TestAction,
        ) -> Result<(), BoxError> {
            self.log.lock().unwrap().push(format!("pre:{}", self.name));
            Ok(())
        }

        fn post_dispatch(
            &self,
            _store: &Store<TestState, TestAction>,
            _action: &TestAction,
        ) -> Result<(), BoxError> {
            self.log.lock().unwrap().push(format!("post:{}", self.name));
            Ok(())
        }
    }

    struct Noop;

    impl Middleware<TestState, TestAction> for Noop {}

    #[test]
    fn wrap_brackets_next() {
        let store = test_store();
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner = Arc::clone(&log);
        let next: DispatchFn<TestState, TestAction> = Arc::new(move |_store, _action| {
            inner.lock().unwrap().push("next".to_string());
            Ok(())
        });

        let wrapped = wrap(
            Arc::new(Recording {
                name: "m1",
                log: Arc::clone(&log),
            }),
            next,
        );

        wrapped(&store, &TestAction::Increase(1)).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["pre:m1", "next", "post:m1"]);
    }

    #[test]
    fn repeated_wrap_nests_outside_in() {
        let store = test_store();
        let log = Arc::new(Mutex::new(Vec::new()));

        let base: DispatchFn<TestState, TestAction> = Arc::new(|_store, _action| Ok(()));

        // Wrapping m2 first and m1 last makes m1 outermost.
        let wrapped = wrap(
            Arc::new(Recording {
                name: "m1",
                log: Arc::clone(&log),
            }),
            wrap(
                Arc::new(Recording {
                    name: "m2",
                    log: Arc::clone(&log),
                }),
                base,
            ),
        );

        wrapped(&store, &TestAction::Increase(1)).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["pre:m1", "pre:m2", "post:m2", "post:m1"]
        );
    }

    #[test]
    fn default_hooks_are_noops() {
        let store = test_store();
        store.add_middleware(Noop);

        store.dispatch(TestAction::Increase(2)).unwrap();
        assert_eq!(store.state().count, 2);
    }

    #[test]
    fn pre_hook_error_short_circuits() {
        let store = test_store();
        let log = Arc::new(Mutex::new(Vec::new()));

        struct FailingPre;

        impl Middleware<TestState, TestAction> for FailingPre {
            fn pre_dispatch(
                &self,
                _store: &Store<TestState, TestAction>,
                _action: &TestAction,
            ) -> Result<(), BoxError> {
                Err("rejected".into())
            }
        }

        let inner = Arc::clone(&log);
        let next: DispatchFn<TestState, TestAction> = Arc::new(move |_store, _action| {
            inner.lock().unwrap().push("next".to_string());
            Ok(())
        });

        let wrapped = wrap(Arc::new(FailingPre), next);
        let result = wrapped(&store, &TestAction::Increase(1));

        assert!(matches!(result, Err(StoreError::Middleware(_))));
        assert!(log.lock().unwrap().is_empty());
    }
}
