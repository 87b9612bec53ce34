//! Order list resource
//!
//! Fetch-only: the order history is read, never mutated from the client.

use shopfront::prelude::*;

use crate::error::ApiError;
use crate::models::Order;

pub type OrderState = ResourceState<Vec<Order>>;

#[derive(shopfront::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum OrderAction {
    OrderFetch,
    OrderDidFetch(Vec<Order>),
    OrderDidFetchError(ApiError),
}

pub fn reducer(state: &mut OrderState, action: OrderAction) -> bool {
    match action {
        OrderAction::OrderFetch => {
            state.begin_fetch();
            true
        }
        OrderAction::OrderDidFetch(orders) => {
            state.resolve(orders);
            true
        }
        OrderAction::OrderDidFetchError(err) => {
            state.fail(err.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EMPTY_PAYLOAD_FALLBACK;

    fn order(id: u64) -> Order {
        Order {
            id,
            details: vec![],
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = OrderState::default();

        reducer(&mut state, OrderAction::OrderFetch);
        assert!(state.is_loading);

        reducer(&mut state, OrderAction::OrderDidFetch(vec![order(1), order(2)]));
        assert_eq!(state.data.len(), 2);
        assert!(state.is_healthy());
    }

    #[test]
    fn test_fetch_success_replaces_previous_orders() {
        let mut state = OrderState::with_data(vec![order(1)]);
        reducer(&mut state, OrderAction::OrderDidFetch(vec![order(7)]));

        assert_eq!(state.data, vec![order(7)]);
    }

    #[test]
    fn test_error_resets_orders() {
        let mut state = OrderState::with_data(vec![order(1)]);
        reducer(
            &mut state,
            OrderAction::OrderDidFetchError(ApiError::EmptyPayload),
        );

        assert!(state.data.is_empty());
        assert_eq!(state.error_message, EMPTY_PAYLOAD_FALLBACK);
        assert!(!state.is_loading);
    }
}
