//! Error types for store operations.

use thiserror::Error;

/// Boxed error type returned by middleware hooks.
///
/// Hooks are free to fail with any error type; the store wraps whatever they
/// return in [`StoreError::Middleware`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by [`Store`](crate::Store) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reducer or middleware hook called `dispatch` on its own store.
    ///
    /// Dispatch is only reentrant from subscribers; by the time they run the
    /// state update has already completed.
    #[error("dispatch called while a dispatch is already in progress")]
    ReentrantDispatch,

    /// A reducer or middleware hook called `subscribe` on its own store.
    #[error("subscribe called while a dispatch is in progress")]
    ReentrantSubscribe,

    /// A middleware hook failed, aborting the dispatch pipeline.
    #[error("middleware hook failed: {0}")]
    Middleware(#[from] BoxError),
}
