//! Core traits and types for shopfront
//!
//! This crate provides the foundational abstractions for client applications
//! that mirror server-backed resources into local state, following a
//! Redux-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **Store**: State container with reducer pattern, one per resource
//! - **ResourceState**: The pending/success/error lifecycle of one resource
//! - **TaskManager**: Lifecycle management for async effect runners
//!
//! # Basic Example
//!
//! ```ignore
//! use shopfront_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum CartAction {
//!     CartFetch,
//!     CartDidFetch(Vec<CartItem>),
//!     CartDidFetchError(String),
//! }
//!
//! fn reducer(state: &mut ResourceState<Vec<CartItem>>, action: CartAction) -> bool {
//!     match action {
//!         CartAction::CartFetch => { state.begin_fetch(); true }
//!         CartAction::CartDidFetch(items) => { state.resolve(items); true }
//!         CartAction::CartDidFetchError(msg) => { state.fail(msg); true }
//!     }
//! }
//!
//! let mut store = Store::new(ResourceState::default(), reducer);
//! store.dispatch(CartAction::CartFetch);
//! ```
//!
//! # Async Effect Pattern
//!
//! Server calls follow a two-phase action pattern:
//!
//! 1. **Intent actions** are dispatched synchronously before the call
//!    starts (e.g. `CartFetch`), so consumers can show a pending state
//!    with no delay.
//! 2. **Result actions** carry the outcome back (e.g. `CartDidFetch`,
//!    `CartDidFetchError`) through the task channel.
//!
//! ```ignore
//! store.dispatch(CartAction::CartFetch);
//! tasks.spawn("cart-fetch", async move {
//!     match api.cart_list().await {
//!         Ok(items) => CartAction::CartDidFetch(items),
//!         Err(e) => CartAction::CartDidFetchError(e.to_string()),
//!     }
//! });
//!
//! // The page loop receives terminal actions and dispatches them
//! while let Some(action) = action_rx.recv().await {
//!     store.dispatch(action);
//! }
//! ```
//!
//! Exactly one intent dispatch precedes exactly one terminal dispatch per
//! invocation. The `Did*` naming convention identifies result actions; with
//! `#[action(infer_categories)]` both phases group under the resource
//! category (e.g. `CartFetch` and `CartDidFetch` get category `"cart"`).

pub mod action;
pub mod resource;
pub mod store;
pub mod tasks;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory};

// Resource exports
pub use resource::{ResourceState, ResourceView};

// Store exports
pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

// Task exports
pub use tasks::{TaskKey, TaskManager};

// Testing exports
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory};
    pub use crate::resource::{ResourceState, ResourceView};
    pub use crate::store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};
    pub use crate::tasks::{TaskKey, TaskManager};
}
