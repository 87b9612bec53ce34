//! shopfront: reducer-style state containers for server-backed resources
//!
//! Like Redux, but for Rust clients talking to a REST backend. Each
//! resource (cart list, user profile, order list) lives in its own store;
//! all mutations happen through dispatched actions, and async effects
//! resolve into terminal actions through a task channel.
//!
//! # Example
//! ```ignore
//! use shopfront::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum CartAction {
//!     CartFetch,
//!     CartDidFetch(Vec<CartItem>),
//!     CartDidFetchError(String),
//! }
//! ```

// Re-export everything from core
pub use shopfront_core::*;

// Re-export derive macros
pub use shopfront_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use shopfront_core::{Action, ActionCategory};

    // Resource lifecycle
    pub use shopfront_core::{ResourceState, ResourceView};

    // Store
    pub use shopfront_core::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

    // Tasks
    pub use shopfront_core::{TaskKey, TaskManager};

    // Derive macros
    pub use shopfront_macros::Action;
}
