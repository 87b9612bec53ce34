//! Application-owned store context
//!
//! One context per session, created at application start and owned by the
//! root. Each page keeps its own store; nothing is process-global. When
//! the context drops, every page's task manager aborts its in-flight
//! effects.

use std::sync::Arc;

use crate::api::StoreApi;
use crate::models::User;
use crate::pages::{CartPage, OrderListPage, UserInfoPage};

/// The set of resource stores for one storefront session.
pub struct AppContext {
    pub cart: CartPage,
    pub orders: OrderListPage,
    pub user: UserInfoPage,
}

impl AppContext {
    /// Wire every page to one shared backend handle.
    pub fn new(api: Arc<dyn StoreApi>, user: User) -> Self {
        Self {
            cart: CartPage::new(Arc::clone(&api)),
            orders: OrderListPage::new(Arc::clone(&api)),
            user: UserInfoPage::new(api, user),
        }
    }
}
