//! Games browser for the DeckBuilder backend
//!
//! - [`api`]: HTTP client for `<base>/games`
//! - [`actions`]: async store actions (`fetch_games`, `fetch_create_game`)
//! - [`state`], [`mutation`], [`reducer`]: the `games` store module
//! - [`routes`]: client-side route table

pub mod actions;
pub mod api;
pub mod mutation;
pub mod reducer;
pub mod routes;
pub mod state;
