//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions describe intents to change resource state: "fetch the cart",
/// "the fetch succeeded with this payload", "the fetch failed with this
/// message". They should be:
/// - Clone: actions may be logged, replayed, or re-queued
/// - Debug: for debugging and logging
/// - Send + 'static: async effect tasks resolve into actions sent across threads
///
/// Use `#[derive(Action)]` from `shopfront-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Optional grouping of actions by resource
///
/// Categories let tests and logging filter actions that belong to one
/// server-backed resource ("cart", "user", "orders"). The derive macro can
/// infer categories from variant name prefixes with
/// `#[action(infer_categories)]`.
pub trait ActionCategory: Action {
    /// Category this action belongs to, if any
    fn category(&self) -> Option<&'static str> {
        None
    }
}
