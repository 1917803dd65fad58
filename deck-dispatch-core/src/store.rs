//! Centralized state store with reducer pattern

use crate::{Mutation, MutationSummary};
use std::marker::PhantomData;

/// A reducer function that applies a mutation to state
///
/// Returns `true` if the state changed and views should re-read it.
pub type Reducer<S, M> = fn(&mut S, M) -> bool;

/// Centralized state store with Redux-like reducer pattern
///
/// The store holds the client state and provides a single point
/// for state changes through the `commit` method.
///
/// # Type Parameters
/// * `S` - The state type
/// * `M` - The mutation type (must implement `Mutation`)
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct GamesState {
///     games: Vec<String>,
/// }
///
/// #[derive(Mutation, Clone, Debug)]
/// enum GamesMutation {
///     SetGames(Vec<String>),
/// }
///
/// fn reducer(state: &mut GamesState, mutation: GamesMutation) -> bool {
///     match mutation {
///         GamesMutation::SetGames(games) => {
///             state.games = games;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(GamesState::default(), reducer);
/// store.commit(GamesMutation::SetGames(vec!["chess".into()]));
/// assert_eq!(store.state().games.len(), 1);
/// ```
pub struct Store<S, M: Mutation> {
    state: S,
    reducer: Reducer<S, M>,
    _marker: PhantomData<M>,
}

impl<S, M: Mutation> Store<S, M> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, M>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Commit a mutation to the store
    ///
    /// The reducer will be called with the current state and mutation.
    /// Returns `true` if the state changed.
    pub fn commit(&mut self, mutation: M) -> bool {
        (self.reducer)(&mut self.state, mutation)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to observe mutations
/// before and after they are applied by the reducer.
pub struct StoreWithMiddleware<S, M: Mutation, W: Middleware<M>> {
    store: Store<S, M>,
    middleware: W,
}

impl<S, M: Mutation, W: Middleware<M>> StoreWithMiddleware<S, M, W> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, M>, middleware: W) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Commit a mutation through middleware and store
    pub fn commit(&mut self, mutation: M) -> bool {
        self.middleware.before(&mutation);
        let changed = self.store.commit(mutation.clone());
        self.middleware.after(&mutation, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &W {
        &self.middleware
    }
}

/// Middleware trait for observing commits
///
/// Implement this trait to add logging, recording, or other
/// cross-cutting concerns to your store.
pub trait Middleware<M: Mutation> {
    /// Called before the mutation is applied by the reducer
    fn before(&mut self, mutation: &M);

    /// Called after the mutation is applied by the reducer
    fn after(&mut self, mutation: &M, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<M: Mutation> Middleware<M> for NoopMiddleware {
    fn before(&mut self, _mutation: &M) {}
    fn after(&mut self, _mutation: &M, _state_changed: bool) {}
}

/// Middleware that reports every commit as a `debug` event
///
/// Each event carries the mutation name, its [`MutationSummary`], and
/// whether the reducer changed state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<M: MutationSummary> Middleware<M> for LoggingMiddleware {
    fn before(&mut self, _mutation: &M) {}

    fn after(&mut self, mutation: &M, state_changed: bool) {
        tracing::debug!(
            mutation = %mutation.name(),
            summary = %mutation.summary(),
            state_changed,
            "Mutation committed"
        );
    }
}
