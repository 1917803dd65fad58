//! Reducer - the only code that writes `GamesState`

use crate::mutation::GamesMutation;
use crate::state::GamesState;

/// Apply a mutation to the games state
///
/// # Returns
/// `true` if state changed and views should re-read it
pub fn reducer(state: &mut GamesState, mutation: GamesMutation) -> bool {
    match mutation {
        GamesMutation::SetGames(games) => {
            // Replace, never merge
            state.games = games;
            true
        }
    }
}
