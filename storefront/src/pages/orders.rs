//! Order history page

use std::sync::Arc;

use shopfront::prelude::*;
use tokio::sync::mpsc;

use crate::api::StoreApi;
use crate::models::Order;
use crate::orders::{reducer, OrderAction, OrderState};
use crate::pages::PageAlert;

/// Orchestrates the read-only order list resource.
pub struct OrderListPage {
    api: Arc<dyn StoreApi>,
    store: StoreWithMiddleware<OrderState, OrderAction, LoggingMiddleware>,
    tasks: TaskManager<OrderAction>,
    rx: mpsc::UnboundedReceiver<OrderAction>,
    pending: usize,
    seq: u64,
}

impl OrderListPage {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            store: StoreWithMiddleware::new(
                OrderState::default(),
                reducer,
                LoggingMiddleware::new(),
            ),
            tasks: TaskManager::new(tx),
            rx,
            pending: 0,
            seq: 0,
        }
    }

    /// Fetch the order list; called on page mount.
    pub fn load(&mut self) {
        self.store.dispatch(OrderAction::OrderFetch);
        let api = Arc::clone(&self.api);
        self.seq += 1;
        self.pending += 1;
        self.tasks.spawn(format!("order-fetch#{}", self.seq), async move {
            match api.order_list().await {
                Ok(orders) => OrderAction::OrderDidFetch(orders),
                Err(err) => OrderAction::OrderDidFetchError(err),
            }
        });
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
    pub fn view(&self) -> ResourceView<'_, Vec<Order>> {
        self.store.state().view()
    }
}
