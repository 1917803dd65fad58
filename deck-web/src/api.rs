//! DeckBuilder games API client
//!
//! One method per backend call, one request per method. Responses are
//! parsed as JSON and handed back untouched; the HTTP status is not
//! inspected, so an error status with a JSON body still counts as success.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::state::GameList;

/// Backend used when no other base URL is given
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Failure of a games API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, request, or body transfer failed
    #[error("games request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not JSON, or not the expected shape
    #[error("could not decode games response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of `GET /games`
#[derive(Debug, Deserialize)]
struct GameListResponse {
    games: GameList,
}

/// Pull the game list out of a `GET /games` body.
///
/// The backend answers with `{ "games": [...] }`. Anything else is a
/// decode error.
pub fn decode_game_list(body: Value) -> Result<GameList, ApiError> {
    let response: GameListResponse = serde_json::from_value(body)?;
    Ok(response.games)
}

/// Client for the `<base>/games` collection endpoint
#[derive(Debug, Clone)]
pub struct GamesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for GamesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GamesClient {
    /// Client for the default local backend
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a backend at `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/games", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the games collection
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET /games` and return the JSON body as-is.
    pub async fn list_games(&self) -> Result<Value, ApiError> {
        tracing::debug!(method = "GET", url = %self.endpoint, "games request");
        let body = self.http.get(&self.endpoint).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `POST /games` with `payload` as the JSON body and return the JSON reply.
    ///
    /// The payload is serialized but not validated.
    pub async fn create_game<T>(&self, payload: &T) -> Result<Value, ApiError>
    where
        T: Serialize + ?Sized,
    {
        tracing::debug!(method = "POST", url = %self.endpoint, "games request");
        let body = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint() {
        assert_eq!(GamesClient::new().endpoint(), "http://localhost:5000/games");
        assert_eq!(
            GamesClient::with_base_url("http://127.0.0.1:9000/").endpoint(),
            "http://127.0.0.1:9000/games"
        );
    }

    #[test]
    fn test_decode_game_list() {
        let games = decode_game_list(json!({ "games": [{ "name": "a" }, { "name": "b" }] }))
            .unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].name(), Some("b"));
    }

    #[test]
    fn test_decode_game_list_rejects_other_shapes() {
        assert!(matches!(
            decode_game_list(json!({ "data": [] })),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_game_list(json!([{ "name": "a" }])),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_game_list(json!({ "games": null })),
            Err(ApiError::Decode(_))
        ));
    }
}
