//! Mutation trait for named, type-safe state changes

use std::fmt::Debug;

/// Marker trait for mutations that can be committed to the store
///
/// Mutations are the only sanctioned way to change store state. They should be:
/// - Clone: Mutations may be logged or recorded by a test harness
/// - Debug: For debugging and logging
/// - Send + 'static: Async actions commit from inside spawned futures
///
/// Use `#[derive(Mutation)]` from `deck-dispatch-macros` to auto-implement this trait.
pub trait Mutation: Clone + Debug + Send + 'static {
    /// The mutation name used in logs (e.g. `"setGames"`)
    fn name(&self) -> &'static str;
}

/// Concise description of a mutation for logging.
///
/// The default falls back to the `Debug` output. Override it for mutations
/// that carry large payloads.
pub trait MutationSummary: Mutation {
    /// One-line summary of this mutation
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
