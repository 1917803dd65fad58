//! Test utilities for deck-dispatch applications
//!
//! - [`TestHarness`]: a [`Commit`] implementation that records every mutation
//!   and forwards it to a real store
//! - Assertion macros for verifying committed mutations
//!
//! # Example
//!
//! ```ignore
//! use deck_dispatch::testing::TestHarness;
//! use deck_dispatch::{assert_committed, assert_not_committed};
//!
//! let mut harness = TestHarness::new(GamesState::default(), reducer);
//!
//! fetch_games(&harness, &client).await?;
//!
//! let committed = harness.drain_committed();
//! assert_committed!(committed, GamesMutation::SetGames(_));
//! assert_eq!(harness.state().games.len(), 2);
//! ```

use tokio::sync::mpsc;

use crate::handle::{Commit, StoreHandle};
use crate::store::Reducer;
use crate::Mutation;

fn ignore_all<M>(_state: &mut (), _mutation: M) -> bool {
    false
}

/// Records committed mutations while applying them to a store.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `M`: The mutation type (must implement [`Mutation`])
pub struct TestHarness<S, M: Mutation> {
    store: StoreHandle<S, M>,
    tx: mpsc::UnboundedSender<M>,
    rx: mpsc::UnboundedReceiver<M>,
}

impl<M: Mutation> TestHarness<(), M> {
    /// A harness with no state that only records mutations.
    pub fn recording() -> Self {
        Self::new((), ignore_all::<M>)
    }
}

impl<S, M: Mutation> TestHarness<S, M> {
    /// Create a new test harness with the given initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, M>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store: StoreHandle::from_reducer(state, reducer),
            tx,
            rx,
        }
    }

    /// The underlying store handle.
    pub fn store(&self) -> &StoreHandle<S, M> {
        &self.store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.store.snapshot()
    }

    /// Drain all committed mutations, oldest first.
    pub fn drain_committed(&mut self) -> Vec<M> {
        let mut mutations = Vec::new();
        while let Ok(mutation) = self.rx.try_recv() {
            mutations.push(mutation);
        }
        mutations
    }

    /// Check if anything was committed since the last drain.
    pub fn has_committed(&mut self) -> bool {
        !self.drain_committed().is_empty()
    }
}

impl<S, M: Mutation> Commit<M> for TestHarness<S, M> {
    fn commit(&self, mutation: M) -> bool {
        let _ = self.tx.send(mutation.clone());
        self.store.commit(mutation)
    }
}

/// Assert that a mutation matching a pattern was committed.
///
/// # Example
///
/// ```ignore
/// let committed = harness.drain_committed();
/// assert_committed!(committed, GamesMutation::SetGames(games) if games.len() == 2);
/// ```
#[macro_export]
macro_rules! assert_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $mutations.iter().any(|m| matches!(m, $pattern $(if $guard)?)),
            "Expected mutation matching `{}` to be committed, but got: {:?}",
            stringify!($pattern),
            $mutations
        );
    };
}

/// Assert that no mutation matching a pattern was committed.
#[macro_export]
macro_rules! assert_not_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$mutations.iter().any(|m| matches!(m, $pattern $(if $guard)?)),
            "Expected no mutation matching `{}`, but it was committed: {:?}",
            stringify!($pattern),
            $mutations
        );
    };
}

/// Count committed mutations matching a pattern.
#[macro_export]
macro_rules! count_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        $mutations
            .iter()
            .filter(|m| matches!(m, $pattern $(if $guard)?))
            .count()
    };
}
