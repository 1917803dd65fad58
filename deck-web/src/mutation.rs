//! Mutations of the `games` store module

use deck_dispatch::MutationSummary;

use crate::state::GameList;

/// Named state changes for the games module
///
/// `SetGames` commits as `"setGames"`.
#[derive(deck_dispatch::Mutation, Clone, Debug, PartialEq)]
pub enum GamesMutation {
    /// Replace the whole list with a freshly fetched one
    SetGames(GameList),
}

/// Keep logs short: report how many games were committed, not their contents
impl MutationSummary for GamesMutation {
    fn summary(&self) -> String {
        match self {
            GamesMutation::SetGames(games) => format!("setGames({} games)", games.len()),
        }
    }
}
