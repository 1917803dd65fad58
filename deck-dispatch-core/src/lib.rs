//! Core traits and types for deck-dispatch
//!
//! This crate provides the foundational abstractions for client applications
//! that keep their data in one store and talk to a REST backend, following a
//! Vuex/Redux-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Mutation**: A named, synchronous state change
//! - **Store**: Centralized state container with reducer pattern
//! - **StoreHandle**: Shared handle that async actions commit through
//! - **Router**: Path-to-view mapping for history-mode navigation
//!
//! # Basic Example
//!
//! ```ignore
//! use deck_dispatch_core::prelude::*;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum GamesMutation {
//!     SetGames(Vec<String>),
//! }
//!
//! #[derive(Default)]
//! struct GamesState {
//!     games: Vec<String>,
//! }
//!
//! fn reducer(state: &mut GamesState, mutation: GamesMutation) -> bool {
//!     match mutation {
//!         GamesMutation::SetGames(games) => { state.games = games; true }
//!     }
//! }
//!
//! let store = StoreHandle::from_reducer(GamesState::default(), reducer);
//! store.commit(GamesMutation::SetGames(vec!["chess".into()]));
//! ```
//!
//! # Async Action Pattern
//!
//! Actions are plain `async fn`s that take the commit capability explicitly:
//!
//! ```ignore
//! async fn fetch_games<C: Commit<GamesMutation>>(ctx: &C, api: &Api) -> Result<(), ApiError> {
//!     let games = api.list_games().await?;
//!     ctx.commit(GamesMutation::SetGames(games));
//!     Ok(())
//! }
//! ```
//!
//! Errors are returned to the caller untouched, and a failed action commits nothing.

pub mod handle;
pub mod mutation;
pub mod router;
pub mod store;
pub mod testing;

// Core trait exports
pub use mutation::{Mutation, MutationSummary};

// Store exports
pub use handle::{Commit, StoreHandle};
pub use store::{
    LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreWithMiddleware,
};

// Router exports
pub use router::{format_path, match_pattern, Routable, RouteParams, Router};

// Testing exports
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::handle::{Commit, StoreHandle};
    pub use crate::mutation::{Mutation, MutationSummary};
    pub use crate::router::{Routable, RouteParams, Router};
    pub use crate::store::{
        LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreWithMiddleware,
    };
}
