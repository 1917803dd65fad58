//! deck-dispatch: Centralized state management and routing for Rust clients
//!
//! Like Vuex, but typed. Views read state, async actions talk to the
//! backend, and all state changes happen through committed mutations.
//!
//! # Example
//! ```ignore
//! use deck_dispatch::prelude::*;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum GamesMutation {
//!     SetGames(Vec<Game>),
//! }
//!
//! #[derive(Routable, Clone, Debug, PartialEq)]
//! enum Route {
//!     #[at("/")]
//!     #[at("/games")]
//!     Games,
//!     #[at("/games/:name")]
//!     Game { name: String },
//!     #[not_found]
//!     NotFound,
//! }
//! ```

// Re-export everything from core
pub use deck_dispatch_core::*;

// Re-export derive macros
pub use deck_dispatch_macros::{Mutation, Routable};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use deck_dispatch_core::{Commit, Mutation, MutationSummary, Routable};

    // Store
    pub use deck_dispatch_core::{
        LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreHandle,
        StoreWithMiddleware,
    };

    // Router
    pub use deck_dispatch_core::{RouteParams, Router};

    // Derive macros
    pub use deck_dispatch_macros::{Mutation, Routable};
}
