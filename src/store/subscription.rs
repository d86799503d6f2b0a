//! Subscription handles for state-change notifications.

use crate::core::State;
use std::sync::{PoisonError, RwLock, Weak};

/// Callback invoked with the new state after each successful dispatch.
pub type SubscriberFn<S> = dyn Fn(&S) + Send + Sync;

pub(crate) struct SubscriberEntry<S: State> {
    pub(crate) id: u64,
    pub(crate) callback: std::sync::Arc<SubscriberFn<S>>,
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// The handle identifies one registration. Calling [`unsubscribe`] removes
/// that registration; later notifications skip it. Dropping the handle
/// without unsubscribing keeps the subscriber active for the lifetime of the
/// store, which suits fire-and-forget observers.
///
/// The handle holds only a weak reference to the store's subscriber list, so
/// it never extends the store's lifetime. Unsubscribing after the store has
/// been dropped is a no-op.
///
/// [`unsubscribe`]: Subscription::unsubscribe
pub struct Subscription<S: State> {
    id: u64,
    subscribers: Weak<RwLock<Vec<SubscriberEntry<S>>>>,
}

impl<S: State> Subscription<S> {
    pub(crate) fn new(id: u64, subscribers: Weak<RwLock<Vec<SubscriberEntry<S>>>>) -> Self {
        Self { id, subscribers }
    }

    /// Remove this subscriber from the store.
    ///
    /// Idempotent: calling it again, or after the store has been dropped,
    /// does nothing.
    pub fn unsubscribe(&self) {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return;
        };
        let mut entries = subscribers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(position) = entries.iter().position(|entry| entry.id == self.id) {
            entries.remove(position);
        }
    }
}

impl<S: State> std::fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: u64,
    }

    impl State for TestState {}

    fn entry(id: u64) -> SubscriberEntry<TestState> {
        SubscriberEntry {
            id,
            callback: Arc::new(|_state| {}),
        }
    }

    #[test]
    fn unsubscribe_removes_matching_entry() {
        let subscribers = Arc::new(RwLock::new(vec![entry(1), entry(2), entry(3)]));
        let subscription = Subscription::new(2, Arc::downgrade(&subscribers));

        subscription.unsubscribe();

        let ids: Vec<u64> = subscribers.read().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let subscribers = Arc::new(RwLock::new(vec![entry(1)]));
        let subscription = Subscription::new(1, Arc::downgrade(&subscribers));

        subscription.unsubscribe();
        subscription.unsubscribe();

        assert!(subscribers.read().unwrap().is_empty());
    }

    #[test]
    fn unsubscribe_after_store_drop_is_noop() {
        let subscribers = Arc::new(RwLock::new(vec![entry(1)]));
        let subscription = Subscription::new(1, Arc::downgrade(&subscribers));
        drop(subscribers);

        subscription.unsubscribe();
    }

    #[test]
    fn drop_does_not_unsubscribe() {
        let subscribers = Arc::new(RwLock::new(vec![entry(1)]));
        {
            let _subscription = Subscription::new(1, Arc::downgrade(&subscribers));
        }

        assert_eq!(subscribers.read().unwrap().len(), 1);
    }
}
