//! The Action marker trait for dispatched values.
//!
//! An action is an immutable value describing an intended state transition.
//! Actions are transient: a single dispatch consumes one action, and the
//! store does not retain it afterward.

use std::fmt::Debug;

/// Marker trait for values that can be dispatched to a store.
///
/// Like [`State`](crate::core::State), this trait carries no methods; it only
/// tags the types a store accepts as inputs to its reducer.
///
/// # Required Traits
///
/// - `Debug`: middleware can log actions
/// - `Send + Sync + 'static`: actions flow through thread-safe pipelines
///
/// The [`action_type!`](crate::action_type) macro declares a conforming type
/// in one step.
///
/// # Example
///
/// ```rust
/// use fluxion::core::Action;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum CounterAction {
///     Increase(u64),
///     Decrease(u64),
/// }
///
/// impl Action for CounterAction {}
/// ```
pub trait Action: Debug + Send + Sync + 'static {}
