//! # Fluxion
//!
//! A minimal, thread-safe unidirectional data flow container for Rust.
//!
//! Fluxion keeps all application state in a single [`Store`]. State never
//! changes in place: callers describe changes as [`Action`] values, a pure
//! [`Reducer`] maps the current state and an action to the next state, and
//! the store swaps the result in atomically. Observers register
//! [`Middleware`] to bracket each dispatch and subscribers to hear about
//! every new state.
//!
//! ## Core Concepts
//!
//! - **State**: a single immutable value owned by the store, replaced wholesale
//!   on every dispatch
//! - **Action**: a value describing an intended state transition
//! - **Reducer**: a pure function `(&State, &Action) -> State` holding all
//!   transition logic
//! - **Middleware**: `pre_dispatch`/`post_dispatch` hooks nested around the
//!   reduce step, first registered outermost
//! - **Subscriber**: a callback invoked with the new state after each
//!   successful dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use fluxion::{action_type, state_type, Store};
//!
//! state_type! {
//!     pub struct CounterState {
//!         pub count: u64,
//!     }
//! }
//!
//! action_type! {
//!     pub enum CounterAction {
//!         Increase(u64),
//!         Decrease(u64),
//!         Reset,
//!     }
//! }
//!
//! let store = Store::new(CounterState { count: 0 }, |state: &CounterState, action: &CounterAction| {
//!     match action {
//!         CounterAction::Increase(n) => CounterState { count: state.count + n },
//!         CounterAction::Decrease(n) => CounterState { count: state.count.saturating_sub(*n) },
//!         CounterAction::Reset => CounterState { count: 0 },
//!     }
//! });
//!
//! let subscription = store.subscribe(|state: &CounterState| {
//!     println!("count: {}", state.count);
//! }).unwrap();
//!
//! store.dispatch(CounterAction::Increase(5)).unwrap();
//! store.dispatch(CounterAction::Decrease(2)).unwrap();
//! assert_eq!(store.state().count, 3);
//!
//! subscription.unsubscribe();
//! ```
//!
//! ## Guarantees
//!
//! - Dispatches are serialized; concurrent callers block, never interleave
//! - Reducers and middleware hooks cannot dispatch or subscribe reentrantly;
//!   such calls fail with a [`StoreError`] instead of corrupting the update
//! - Subscribers run after the state has settled and may dispatch follow-ups
//! - A failing hook aborts the dispatch but leaves the store usable

pub mod core;
pub mod middleware;
pub mod store;

pub use crate::core::{Action, Reducer, State};
pub use crate::middleware::{
    DispatchFn, DispatchJournal, DispatchRecord, LoggingMiddleware, Middleware,
};
pub use crate::store::{BoxError, Store, StoreError, SubscriberFn, Subscription};
