//! Path routing for history-mode navigation
//!
//! Routes are declared as an enum implementing [`Routable`], usually via
//! `#[derive(Routable)]`:
//!
//! ```ignore
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
//!
//! let mut router = Router::<Route>::with_base("/app/");
//! assert_eq!(router.push("/app/games/chess"), Some(Route::Game { name: "chess".into() }));
//! assert_eq!(router.href(&Route::Games), "/app/");
//! ```
//!
//! Matching rules:
//! - query string and fragment are ignored
//! - empty segments are ignored, so a trailing slash still matches
//! - `:param` segments match any single non-empty segment and are percent-decoded

use std::fmt::Debug;

/// Named parameters captured while matching a path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: Vec<(String, String)>,
}

impl RouteParams {
    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A set of client-side routes.
///
/// Use `#[derive(Routable)]` from `deck-dispatch-macros` to generate this from
/// `#[at("...")]` attributes.
pub trait Routable: Clone + Debug + PartialEq + Sized {
    /// All path patterns in match order. Aliases appear as separate entries.
    fn patterns() -> &'static [&'static str];

    /// Build the route for the pattern at `index` from captured params.
    fn from_match(index: usize, params: &RouteParams) -> Option<Self>;

    /// Canonical path for this route.
    fn to_path(&self) -> String;

    /// Route used when nothing matches, if one is declared.
    fn not_found_route() -> Option<Self>;

    /// Name of the view this route renders.
    fn name(&self) -> &'static str;

    /// Resolve a path (relative to the router base) to a route.
    fn recognize(path: &str) -> Option<Self> {
        Self::patterns()
            .iter()
            .enumerate()
            .find_map(|(index, pattern)| {
                let params = match_pattern(pattern, path)?;
                Self::from_match(index, &params)
            })
            .or_else(Self::not_found_route)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty())
}

/// Match a single pattern such as `/games/:name` against a path.
///
/// Returns the captured params on success.
pub fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let mut path_segments = segments(path);
    let mut params = RouteParams::default();

    for expected in segments(pattern) {
        let actual = path_segments.next()?;
        match expected.strip_prefix(':') {
            Some(name) => {
                let value = urlencoding::decode(actual).ok()?;
                params.params.push((name.to_string(), value.into_owned()));
            }
            None if expected == actual => {}
            None => return None,
        }
    }

    if path_segments.next().is_some() {
        return None;
    }
    Some(params)
}

/// Fill a pattern's `:param` segments with percent-encoded values.
///
/// Params missing from `params` are left as an empty segment.
pub fn format_path(pattern: &str, params: &[(&str, &str)]) -> String {
    let mut path = String::new();
    for segment in segments(pattern) {
        path.push('/');
        match segment.strip_prefix(':') {
            Some(name) => {
                if let Some((_, value)) = params.iter().find(|(key, _)| *key == name) {
                    path.push_str(&urlencoding::encode(value));
                }
            }
            None => path.push_str(segment),
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// History-mode router with an optional deployment base.
#[derive(Debug, Clone)]
pub struct Router<R: Routable> {
    base: String,
    history: Vec<R>,
    cursor: usize,
}

impl<R: Routable> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Routable> Router<R> {
    /// Router serving from the site root.
    pub fn new() -> Self {
        Self::with_base("/")
    }

    /// Router serving under `base` (e.g. `/app/`).
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            base,
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// The normalized base prefix (empty for the root).
    pub fn base(&self) -> &str {
        &self.base
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(&self.base)?;
        match rest.chars().next() {
            None => Some("/"),
            Some('/' | '?' | '#') => Some(rest),
            Some(_) => None,
        }
    }

    /// Resolve a full path without touching history.
    pub fn resolve(&self, path: &str) -> Option<R> {
        match self.strip_base(path) {
            Some(relative) => R::recognize(relative),
            None => R::not_found_route(),
        }
    }

    /// Full href for a route, including the base.
    pub fn href(&self, route: &R) -> String {
        let path = route.to_path();
        if self.base.is_empty() {
            path
        } else if path == "/" {
            format!("{}/", self.base)
        } else {
            format!("{}{}", self.base, path)
        }
    }

    /// Navigate to `path`, dropping any forward history.
    ///
    /// Returns the resolved route, or `None` if nothing matched and no
    /// fallback route exists (history is left unchanged in that case).
    pub fn push(&mut self, path: &str) -> Option<R> {
        let route = self.resolve(path)?;
        tracing::debug!(path, view = route.name(), "navigate");
        self.history.truncate(self.cursor);
        self.history.push(route.clone());
        self.cursor = self.history.len();
        Some(route)
    }

    /// The active route.
    pub fn current(&self) -> Option<&R> {
        self.cursor.checked_sub(1).and_then(|i| self.history.get(i))
    }

    /// Go back one entry. Returns the new active route.
    pub fn back(&mut self) -> Option<&R> {
        if self.cursor > 1 {
            self.cursor -= 1;
            self.current()
        } else {
            None
        }
    }

    /// Go forward one entry. Returns the new active route.
    pub fn forward(&mut self) -> Option<&R> {
        if self.cursor < self.history.len() {
            self.cursor += 1;
            self.current()
        } else {
            None
        }
    }
}
