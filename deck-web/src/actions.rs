//! Store actions for the games module
//!
//! Each action is an `async fn` that receives the commit capability and the
//! API client explicitly. Errors come back to the caller unchanged, and an
//! action that fails commits nothing.

use deck_dispatch::{Commit, LoggingMiddleware, StoreHandle, StoreWithMiddleware};
use serde_json::Value;

use crate::api::{decode_game_list, ApiError, GamesClient};
use crate::mutation::GamesMutation;
use crate::reducer::reducer;
use crate::state::GamesState;

/// Shared handle to the games store
pub type GamesStore = StoreHandle<GamesState, GamesMutation, LoggingMiddleware>;

/// Fresh store with an empty list and commit logging.
pub fn games_store() -> GamesStore {
    StoreHandle::new(StoreWithMiddleware::new(
        GamesState::default(),
        reducer,
        LoggingMiddleware::new(),
    ))
}

/// Fetch the game list and commit it with `setGames`.
///
/// Concurrent calls are not coordinated; whichever response arrives last
/// is what stays in the store.
pub async fn fetch_games<C>(ctx: &C, api: &GamesClient) -> Result<(), ApiError>
where
    C: Commit<GamesMutation> + ?Sized,
{
    let body = api.list_games().await?;
    let games = decode_game_list(body)?;
    tracing::info!(count = games.len(), "fetched games");
    ctx.commit(GamesMutation::SetGames(games));
    Ok(())
}

/// Create a game and return the backend's reply.
///
/// Nothing is committed: the new game shows up in the store only after the
/// next [`fetch_games`].
pub async fn fetch_create_game<C>(
    _ctx: &C,
    api: &GamesClient,
    payload: &Value,
) -> Result<Value, ApiError>
where
    C: Commit<GamesMutation> + ?Sized,
{
    let response = api.create_game(payload).await?;
    tracing::info!("game created");
    Ok(response)
}
