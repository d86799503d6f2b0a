//! The store: single owner of application state.
//!
//! A [`Store`] holds one state value, one reducer, an ordered middleware
//! chain, and a list of subscribers. Every dispatch walks the same path:
//!
//! 1. middleware `pre_dispatch` hooks, outermost first
//! 2. the reducer, producing the next state from the current one
//! 3. middleware `post_dispatch` hooks, innermost first
//! 4. subscriber notification with the settled state
//!
//! While steps 1-3 run the store is marked as dispatching on the current
//! thread; a reducer or hook that calls back into `dispatch` or `subscribe`
//! gets an error instead of corrupting the in-progress update. The mark is
//! cleared before step 4, so subscribers may dispatch follow-up actions.
//! Other threads are never rejected; their calls block until the in-flight
//! dispatch completes.

mod error;
mod subscription;

pub use error::{BoxError, StoreError};
pub use subscription::{SubscriberFn, Subscription};

use crate::core::{Action, Reducer, State};
use crate::middleware::{wrap, DispatchFn, Middleware};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use std::thread::{self, ThreadId};
use subscription::SubscriberEntry;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read_lock<T>(rwlock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rwlock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(rwlock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    rwlock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the dispatching mark when dropped, panics included.
struct DispatchGuard<'a> {
    flag: &'a Mutex<Option<ThreadId>>,
}

impl<'a> DispatchGuard<'a> {
    fn engage(flag: &'a Mutex<Option<ThreadId>>) -> Self {
        *lock(flag) = Some(thread::current().id());
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        *lock(self.flag) = None;
    }
}

/// Thread-safe state container driving unidirectional data flow.
///
/// The store is the only place state changes: callers describe changes as
/// [`Action`] values and hand them to [`dispatch`], which runs the
/// [`Reducer`] and replaces the stored state with its result. Reads go
/// through [`state`] (cloning snapshot) or [`read`] (borrowed access).
///
/// Middleware registered with [`add_middleware`] wraps the reduce step in
/// registration order, first registered outermost. [`subscribe`] registers a
/// callback invoked with the new state after every successful dispatch.
///
/// All methods take `&self`; the store synchronizes internally and can be
/// shared across threads behind an `Arc`.
///
/// # Example
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
///         Reset,
///     }
/// }
///
/// let store = Store::new(CounterState { count: 0 }, |state: &CounterState, action: &CounterAction| {
///     match action {
///         CounterAction::Increase(n) => CounterState { count: state.count + n },
///         CounterAction::Reset => CounterState { count: 0 },
///     }
/// });
///
/// let subscription = store.subscribe(|state: &CounterState| {
///     println!("count is now {}", state.count);
/// }).unwrap();
///
/// store.dispatch(CounterAction::Increase(5)).unwrap();
/// assert_eq!(store.state().count, 5);
///
/// subscription.unsubscribe();
/// ```
///
/// [`dispatch`]: Store::dispatch
/// [`state`]: Store::state
/// [`read`]: Store::read
/// [`add_middleware`]: Store::add_middleware
/// [`subscribe`]: Store::subscribe
pub struct Store<S: State, A: Action> {
    state: RwLock<S>,
    reducer: Box<dyn Reducer<S, A>>,
    middlewares: RwLock<Vec<Arc<dyn Middleware<S, A>>>>,
    pipeline: RwLock<DispatchFn<S, A>>,
    dispatching: Mutex<Option<ThreadId>>,
    op_lock: Mutex<()>,
    subscribers: Arc<RwLock<Vec<SubscriberEntry<S>>>>,
    next_subscription_id: AtomicU64,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store with an initial state and a reducer.
    ///
    /// The reducer may be a closure `Fn(&S, &A) -> S` or any
    /// [`Reducer`] implementation. The store starts with no middleware and
    /// no subscribers.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self {
            state: RwLock::new(initial),
            reducer: Box::new(reducer),
            middlewares: RwLock::new(Vec::new()),
            pipeline: RwLock::new(Self::reduce_base()),
            dispatching: Mutex::new(None),
            op_lock: Mutex::new(()),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscription_id: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        read_lock(&self.state).clone()
    }

    /// Run a closure against the current state without cloning it.
    ///
    /// The state lock is held for the duration of the closure, so keep the
    /// work short and do not call back into the store from inside it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&read_lock(&self.state))
    }

    /// Dispatch an action through the middleware chain and the reducer.
    ///
    /// On success the store's state has been replaced by the reducer's
    /// result and every subscriber has been notified with the new value, in
    /// registration order.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ReentrantDispatch`] when called from a reducer or
    ///   middleware hook of this store
    /// - [`StoreError::Middleware`] when a hook fails; a `pre_dispatch`
    ///   failure leaves the state untouched, a `post_dispatch` failure keeps
    ///   the already-applied update. Either way subscribers are not notified
    ///   and the store remains usable.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self.dispatching_here() {
            return Err(StoreError::ReentrantDispatch);
        }

        let (state, callbacks) = {
            let _serial = lock(&self.op_lock);
            let pipeline = Arc::clone(&read_lock(&self.pipeline));
            {
                let _guard = DispatchGuard::engage(&self.dispatching);
                pipeline(self, &action)?;
            }
            let state = read_lock(&self.state).clone();
            let callbacks: Vec<Arc<SubscriberFn<S>>> = read_lock(&self.subscribers)
                .iter()
                .map(|entry| Arc::clone(&entry.callback))
                .collect();
            (state, callbacks)
        };

        for callback in &callbacks {
            callback(&state);
        }

        Ok(())
    }

    /// Register a middleware at the end of the chain.
    ///
    /// Middleware wraps the reduce step in registration order: the first
    /// registered runs its `pre_dispatch` first and its `post_dispatch`
    /// last. Registration takes effect on the next dispatch; an in-flight
    /// dispatch keeps the chain it started with.
    pub fn add_middleware<M>(&self, middleware: M)
    where
        M: Middleware<S, A> + 'static,
    {
        self.push_middleware(Arc::new(middleware));
    }

    /// Register several middleware at once, preserving their order.
    pub fn add_middlewares<I>(&self, middlewares: I)
    where
        I: IntoIterator<Item = Arc<dyn Middleware<S, A>>>,
    {
        for middleware in middlewares {
            self.push_middleware(middleware);
        }
    }

    /// Register a callback invoked with the new state after each successful
    /// dispatch.
    ///
    /// Callbacks run in registration order, after the dispatch has fully
    /// settled. A callback may dispatch follow-up actions or subscribe; by
    /// the time it runs the store is no longer marked as dispatching.
    ///
    /// The returned [`Subscription`] removes the callback via
    /// [`Subscription::unsubscribe`]. Dropping it keeps the subscription
    /// alive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReentrantSubscribe`] when called from a reducer
    /// or middleware hook of this store.
    pub fn subscribe<F>(&self, callback: F) -> Result<Subscription<S>, StoreError>
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        if self.dispatching_here() {
            return Err(StoreError::ReentrantSubscribe);
        }

        let _serial = lock(&self.op_lock);
        let id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        write_lock(&self.subscribers).push(SubscriberEntry {
            id,
            callback: Arc::new(callback),
        });
        Ok(Subscription::new(id, Arc::downgrade(&self.subscribers)))
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        read_lock(&self.subscribers).len()
    }

    pub(crate) fn apply_reduction(&self, action: &A) {
        // The reducer runs on a snapshot so no lock is held during user code.
        let current = self.state();
        let next = self.reducer.reduce(&current, action);
        *write_lock(&self.state) = next;
    }

    fn reduce_base() -> DispatchFn<S, A> {
        Arc::new(|store: &Store<S, A>, action: &A| {
            store.apply_reduction(action);
            Ok(())
        })
    }

    fn push_middleware(&self, middleware: Arc<dyn Middleware<S, A>>) {
        let mut list = write_lock(&self.middlewares);
        list.push(middleware);
        let composed = list
            .iter()
            .rev()
            .fold(Self::reduce_base(), |next, m| wrap(Arc::clone(m), next));
        *write_lock(&self.pipeline) = composed;
    }

    fn dispatching_here(&self) -> bool {
        *lock(&self.dispatching) == Some(thread::current().id())
    }
}

impl<S: State, A: Action> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*read_lock(&self.state))
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
