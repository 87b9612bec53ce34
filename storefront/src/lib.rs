//! Headless storefront client built on shopfront resource stores
//!
//! Mirrors three server-backed resources into local state: the shopping
//! cart, the order history, and the signed-in user. Each resource is an
//! independent store following the same lifecycle: a page dispatches an
//! intent action, an effect runner performs one HTTP call, and the
//! outcome comes back as a success or error action that a pure reducer
//! folds into `ResourceState`.
//!
//! # Layout
//!
//! - [`api`]: the `StoreApi` seam and its `reqwest` implementation
//! - [`cart`], [`orders`], [`user`]: per-resource actions and reducers
//! - [`pages`]: page orchestrators consumed by the CLI (and any other
//!   frontend)
//! - [`context`]: the application-owned context tying pages to one
//!   backend handle

pub mod api;
pub mod cart;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod orders;
pub mod pages;
pub mod user;
pub mod validate;

pub use api::{HttpApi, StoreApi};
pub use config::BackendConfig;
pub use context::AppContext;
pub use error::ApiError;
pub use models::{CartItem, Order, OrderItem, User};
