//! Games state - single source of truth
//!
//! Views read this through the store handle; only the reducer writes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A game record as the backend sends it.
///
/// The shape is owned by the backend and passed through untouched. Only
/// `name` is ever read on the client side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Game(Value);

impl Game {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The game's `name` field, if it has a string one.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Game {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Ordered list of games, replaced wholesale on every successful fetch.
pub type GameList = Vec<Game>;

/// State of the `games` store module
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GamesState {
    /// Last successfully fetched list (empty until the first fetch)
    pub games: GameList,
}

impl GamesState {
    /// Look up a game by name (used by the detail view).
    pub fn game(&self, name: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.name() == Some(name))
    }

    /// Names of all games, skipping records without one.
    pub fn names(&self) -> Vec<&str> {
        self.games.iter().filter_map(Game::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_game_passes_json_through() {
        let raw = json!({ "name": "chess", "description": "classic", "image": null });
        let game: Game = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(game.name(), Some("chess"));
        assert_eq!(serde_json::to_value(&game).unwrap(), raw);
    }

    #[test]
    fn test_game_without_name() {
        assert_eq!(Game::new(json!({ "title": "x" })).name(), None);
        assert_eq!(Game::new(json!({ "name": 3 })).name(), None);
        assert_eq!(Game::new(json!("chess")).name(), None);
    }

    #[test]
    fn test_lookup_by_name() {
        let state = GamesState {
            games: vec![
                Game::new(json!({ "name": "chess" })),
                Game::new(json!({ "id": 1 })),
                Game::new(json!({ "name": "go" })),
            ],
        };

        assert_eq!(state.names(), vec!["chess", "go"]);
        assert_eq!(
            state.game("go").map(Game::as_value),
            Some(&json!({ "name": "go" }))
        );
        assert!(state.game("poker").is_none());
    }
}
