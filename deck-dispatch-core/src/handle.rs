//! Shared store handle passed to async actions
//!
//! Actions never reach for global state. They receive something that
//! implements [`Commit`] and use it as their only way to change the store.
//!
//! # Example
//!
//! ```ignore
//! use deck_dispatch::{Commit, StoreHandle, StoreWithMiddleware, LoggingMiddleware};
//!
//! async fn fetch_items<C: Commit<ItemsMutation>>(ctx: &C) -> Result<(), Error> {
//!     let items = api::list_items().await?;
//!     ctx.commit(ItemsMutation::SetItems(items));
//!     Ok(())
//! }
//!
//! let store = StoreHandle::new(StoreWithMiddleware::new(
//!     ItemsState::default(),
//!     reducer,
//!     LoggingMiddleware::new(),
//! ));
//! fetch_items(&store).await?;
//! let count = store.with_state(|state| state.items.len());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::store::{Middleware, NoopMiddleware, Reducer, StoreWithMiddleware};
use crate::Mutation;

/// The capability to commit mutations.
///
/// This is what actions receive instead of the store itself.
pub trait Commit<M: Mutation> {
    /// Commit a mutation. Returns `true` if state changed.
    fn commit(&self, mutation: M) -> bool;
}

/// Cloneable, thread-safe handle to a store.
///
/// Each commit runs the reducer once under a lock, so a reader never
/// observes a half-applied mutation. Concurrent actions are not ordered:
/// whichever commits last wins.
pub struct StoreHandle<S, M: Mutation, W: Middleware<M> = NoopMiddleware> {
    inner: Arc<Mutex<StoreWithMiddleware<S, M, W>>>,
    version: Arc<watch::Sender<u64>>,
}

impl<S, M: Mutation, W: Middleware<M>> Clone for StoreHandle<S, M, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            version: Arc::clone(&self.version),
        }
    }
}

impl<S, M: Mutation> StoreHandle<S, M, NoopMiddleware> {
    /// Create a handle around a plain state and reducer.
    pub fn from_reducer(state: S, reducer: Reducer<S, M>) -> Self {
        Self::new(StoreWithMiddleware::new(state, reducer, NoopMiddleware))
    }
}

impl<S, M: Mutation, W: Middleware<M>> StoreHandle<S, M, W> {
    /// Wrap a store so it can be shared between actions.
    pub fn new(store: StoreWithMiddleware<S, M, W>) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(store)),
            version: Arc::new(version),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreWithMiddleware<S, M, W>> {
        // A commit is one reducer call; state is whole even after a panic elsewhere.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the current state through a closure.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.lock().state())
    }

    /// Clone out a snapshot of the current state.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.with_state(S::clone)
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes a counter that increases after every commit
    /// that reported a change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Number of commits that changed state so far.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }
}

impl<S, M: Mutation, W: Middleware<M>> Commit<M> for StoreHandle<S, M, W> {
    fn commit(&self, mutation: M) -> bool {
        let changed = self.lock().commit(mutation);
        if changed {
            self.version.send_modify(|v| *v += 1);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        items: Vec<u32>,
    }

    #[derive(Clone, Debug)]
    enum TestMutation {
        SetItems(Vec<u32>),
        Touch,
    }

    impl Mutation for TestMutation {
        fn name(&self) -> &'static str {
            match self {
                TestMutation::SetItems(_) => "setItems",
                TestMutation::Touch => "touch",
            }
        }
    }

    fn reducer(state: &mut TestState, mutation: TestMutation) -> bool {
        match mutation {
            TestMutation::SetItems(items) => {
                state.items = items;
                true
            }
            TestMutation::Touch => false,
        }
    }

    #[test]
    fn test_clones_share_state() {
        let store = StoreHandle::from_reducer(TestState::default(), reducer);
        let other = store.clone();

        other.commit(TestMutation::SetItems(vec![1, 2]));

        assert_eq!(store.snapshot().items, vec![1, 2]);
        assert_eq!(store.with_state(|s| s.items.len()), 2);
    }

    #[test]
    fn test_version_counts_changes_only() {
        let store = StoreHandle::from_reducer(TestState::default(), reducer);
        assert_eq!(store.version(), 0);

        store.commit(TestMutation::Touch);
        assert_eq!(store.version(), 0);

        store.commit(TestMutation::SetItems(vec![3]));
        assert_eq!(store.version(), 1);
    }

    #[tokio::test]
    async fn test_subscribe_wakes_on_change() {
        let store = StoreHandle::from_reducer(TestState::default(), reducer);
        let mut rx = store.subscribe();

        let writer = store.clone();
        tokio::spawn(async move {
            writer.commit(TestMutation::SetItems(vec![7]));
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
        assert_eq!(store.snapshot().items, vec![7]);
    }
}
