//! Page-level orchestration
//!
//! Each page owns one resource store, one task manager for its effect
//! runners, and the receiving end of the action channel. User events call
//! page methods; the methods dispatch the intent action synchronously,
//! then spawn the network call. Terminal actions flow back through the
//! channel and are folded into the store by `pump`/`settle`.

mod cart;
mod orders;
mod user_info;

pub use cart::CartPage;
pub use orders::OrderListPage;
pub use user_info::UserInfoPage;

use thiserror::Error;

/// Blocking alert text for faults outside the request lifecycle.
pub const FATAL_ALERT: &str = "Something went wrong. Please reconnect.";

/// The effect channel died with results still pending.
///
/// This is the one failure that is not absorbed into resource state: it
/// means the page can no longer observe its own effects, so it surfaces
/// as a blocking alert instead of an error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", FATAL_ALERT)]
pub struct PageAlert;
