//! Middleware that records a timestamped journal of dispatched actions.

use super::Middleware;
use crate::core::{Action, State};
use crate::store::{BoxError, Store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// A single journal entry: the dispatched action and when it completed.
///
/// The action is captured via its `Debug` rendering so the journal stays
/// uniform across action types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// `Debug` rendering of the dispatched action.
    pub action: String,
    /// When the dispatch completed.
    pub at: DateTime<Utc>,
}

/// Middleware that appends a [`DispatchRecord`] for every completed dispatch.
///
/// The journal records in `post_dispatch`, so a dispatch aborted by an
/// earlier middleware or a failing reducer pipeline leaves no entry. Cloning
/// a journal shares the underlying record list, which lets the caller keep a
/// handle while the store owns the middleware:
///
/// ```rust
/// use fluxion::{action_type, state_type, DispatchJournal, Store};
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
/// let journal = DispatchJournal::new();
/// store.add_middleware(journal.clone());
///
/// store.dispatch(CounterAction::Increase(2)).unwrap();
/// assert_eq!(journal.len(), 1);
/// assert_eq!(journal.records()[0].action, "Increase(2)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DispatchJournal {
    records: Arc<RwLock<Vec<DispatchRecord>>>,
}

impl DispatchJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records in dispatch order.
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded dispatches.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the journal has recorded anything yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, A: Action> Middleware<S, A> for DispatchJournal {
    fn post_dispatch(&self, _store: &Store<S, A>, action: &A) -> Result<(), BoxError> {
        let record = DispatchRecord {
            action: format!("{action:?}"),
            at: Utc::now(),
        };
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(())
    }
}
