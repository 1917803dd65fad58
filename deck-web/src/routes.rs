//! Client-side route table
//!
//! `/` and `/games` show the list, `/games/:name` shows one game. Anything
//! else lands on `NotFound`, which renders a blank view.

use deck_dispatch::Routable;

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    /// List view; the site root is an alias
    #[at("/games")]
    #[at("/")]
    Games,

    /// Detail view for the game called `name`
    #[at("/games/:name")]
    Game { name: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `(pattern, view)` for every navigable path, in match order.
///
/// The fallback's own path is left out: every unmatched path reaches it.
pub fn route_table() -> Vec<(&'static str, &'static str)> {
    let fallback = Route::not_found_route();
    Route::patterns()
        .iter()
        .filter_map(|pattern| {
            let route = Route::recognize(pattern)?;
            (Some(&route) != fallback.as_ref()).then(|| (*pattern, route.name()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Games));
        assert_eq!(Route::recognize("/games"), Some(Route::Games));
        assert_eq!(Route::Games.to_path(), "/games");
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(
            Route::recognize("/games/foo"),
            Some(Route::Game { name: "foo".into() })
        );
        assert_eq!(Route::Game { name: "foo".into() }.name(), "Game");
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        assert_eq!(Route::recognize("/decks"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/games/foo/bar"), Some(Route::NotFound));
    }

    #[test]
    fn test_route_table_lists_views_only() {
        assert_eq!(
            route_table(),
            vec![("/games", "Games"), ("/", "Games"), ("/games/:name", "Game")]
        );
    }
}
