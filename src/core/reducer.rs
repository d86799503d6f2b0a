//! The Reducer trait: pure reduction of actions into new states.

use super::action::Action;
use super::state::State;

/// Pure function mapping `(state, action)` to the next state.
///
/// Reducers contain all state-transition logic. They must be deterministic
/// and free of side effects: no I/O, no interior mutation, and in particular
/// no dispatching — a reducer that calls back into its own store is rejected
/// at runtime with [`StoreError::ReentrantDispatch`](crate::StoreError).
///
/// A blanket implementation covers plain closures, so most applications never
/// implement this trait by hand:
///
/// ```rust
/// use fluxion::{action_type, state_type, Store};
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
/// store.dispatch(CounterAction::Increase(5)).unwrap();
/// assert_eq!(store.state().count, 5);
/// ```
pub trait Reducer<S: State, A: Action>: Send + Sync {
    /// Produce the next state from the current state and an action.
    ///
    /// The returned value becomes the store's canonical state atomically with
    /// respect to observers; no subscriber sees an intermediate value.
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}
