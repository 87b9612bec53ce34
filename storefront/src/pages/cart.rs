//! Shopping cart page

use std::sync::Arc;

use shopfront::prelude::*;
use tokio::sync::mpsc;

use crate::api::StoreApi;
use crate::cart::{reducer, CartAction, CartState};
use crate::models::CartItem;
use crate::pages::PageAlert;

/// Orchestrates the cart list resource.
pub struct CartPage {
    api: Arc<dyn StoreApi>,
    store: StoreWithMiddleware<CartState, CartAction, LoggingMiddleware>,
    tasks: TaskManager<CartAction>,
    rx: mpsc::UnboundedReceiver<CartAction>,
    pending: usize,
    seq: u64,
}

impl CartPage {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            store: StoreWithMiddleware::new(CartState::default(), reducer, LoggingMiddleware::new()),
            tasks: TaskManager::new(tx),
            rx,
            pending: 0,
            seq: 0,
        }
    }

    /// Fetch the cart list; called on page mount.
    pub fn load(&mut self) {
        self.store.dispatch(CartAction::CartFetch);
        let api = Arc::clone(&self.api);
        self.spawn("cart-fetch", async move {
            match api.cart_list().await {
                Ok(items) => CartAction::CartDidFetch(items),
                Err(err) => CartAction::CartDidFetchError(err),
            }
        });
    }

    /// Remove one item from the cart.
    pub fn remove_item(&mut self, id: u64) {
        self.store.dispatch(CartAction::CartRemove { id });
        let api = Arc::clone(&self.api);
        self.spawn("cart-remove", async move {
            match api.remove_cart_item(id).await {
                Ok(()) => CartAction::CartDidRemove { id },
                Err(err) => CartAction::CartDidRemoveError(err),
            }
        });
    }

    /// Change one item's count.
    pub fn set_item_count(&mut self, id: u64, count: u32) {
        self.store.dispatch(CartAction::CartSetCount { id, count });
        let api = Arc::clone(&self.api);
        self.spawn("cart-set-count", async move {
            match api.set_cart_count(id, count).await {
                Ok(()) => CartAction::CartDidSetCount { id, count },
                Err(err) => CartAction::CartDidSetCountError(err),
            }
        });
    }

    // Every invocation gets a fresh key: in-flight requests are never
    // cancelled, and interleaved invocations settle last-write-wins.
    fn spawn<F>(&mut self, op: &str, future: F)
    where
        F: std::future::Future<Output = CartAction> + Send + 'static,
    {
        self.seq += 1;
        self.pending += 1;
        self.tasks.spawn(format!("{op}#{}", self.seq), future);
    }

    /// Fold any already-completed effect results into the store.
    pub fn pump(&mut self) -> usize {
        let mut folded = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.store.dispatch(action);
            folded += 1;
        }
        folded
    }

    /// Wait until every in-flight effect has resolved into state.
    pub async fn settle(&mut self) -> Result<(), PageAlert> {
        while self.pending > 0 {
            match self.rx.recv().await {
                Some(action) => {
                    self.pending -= 1;
                    self.store.dispatch(action);
                }
                None => return Err(PageAlert),
            }
        }
        Ok(())
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ResourceView<'_, Vec<CartItem>> {
        self.store.state().view()
    }
}
