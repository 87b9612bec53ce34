//! Cart list resource
//!
//! Three operations, each a Start/Did/DidError action triple: fetch the
//! list, remove one item, change one item's count. Mutation successes
//! carry only the identity and the changed field so the reducer patches
//! the list in place instead of re-fetching.

use shopfront::prelude::*;

use crate::error::ApiError;
use crate::models::CartItem;

pub type CartState = ResourceState<Vec<CartItem>>;

#[derive(shopfront::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum CartAction {
    CartFetch,
    CartDidFetch(Vec<CartItem>),
    CartDidFetchError(ApiError),

    CartRemove { id: u64 },
    CartDidRemove { id: u64 },
    CartDidRemoveError(ApiError),

    CartSetCount { id: u64, count: u32 },
    CartDidSetCount { id: u64, count: u32 },
    CartDidSetCountError(ApiError),
}

/// Cart reducer: the only writer of [`CartState`].
pub fn reducer(state: &mut CartState, action: CartAction) -> bool {
    match action {
        CartAction::CartFetch => {
            state.begin_fetch();
            true
        }
        // Mutations deliberately show no loading indicator
        CartAction::CartRemove { .. } | CartAction::CartSetCount { .. } => {
            state.begin_mutation();
            true
        }
        CartAction::CartDidFetch(items) => {
            state.resolve(items);
            true
        }
        CartAction::CartDidRemove { id } => {
            state.data.retain(|item| item.id != id);
            state.settle();
            true
        }
        CartAction::CartDidSetCount { id, count } => {
            for item in &mut state.data {
                if item.id == id {
                    item.count = count;
                }
            }
            state.settle();
            true
        }
        CartAction::CartDidFetchError(err)
        | CartAction::CartDidRemoveError(err)
        | CartAction::CartDidSetCountError(err) => {
            state.fail(err.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TRANSPORT_FALLBACK;

    fn item(id: u64, count: u32) -> CartItem {
        CartItem {
            id,
            name: format!("item-{id}"),
            price: 1000,
            image_url: String::new(),
            count,
        }
    }

    fn seeded() -> CartState {
        CartState::with_data(vec![item(1, 2), item(2, 5)])
    }

    #[test]
    fn test_fetch_start_sets_loading_and_keeps_data() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartFetch);

        assert!(state.is_loading);
        assert_eq!(state.data.len(), 2);
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_mutation_start_does_not_set_loading() {
        let mut state = seeded();
        state.is_loading = true;
        reducer(&mut state, CartAction::CartRemove { id: 1 });

        assert!(!state.is_loading);
        assert_eq!(state.data.len(), 2);

        state.is_loading = true;
        reducer(&mut state, CartAction::CartSetCount { id: 1, count: 3 });
        assert!(!state.is_loading);
    }

    #[test]
    fn test_fetch_success_replaces_data_wholesale() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartDidFetch(vec![item(9, 1)]));

        assert_eq!(state.data, vec![item(9, 1)]);
        assert!(state.is_healthy());
    }

    #[test]
    fn test_targeted_set_count_preserves_order_and_neighbors() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartDidSetCount { id: 1, count: 9 });

        assert_eq!(state.data, vec![item(1, 9), item(2, 5)]);
        assert!(state.is_healthy());
    }

    #[test]
    fn test_targeted_remove_filters_single_entry() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartDidRemove { id: 2 });

        assert_eq!(state.data, vec![item(1, 2)]);
        assert!(state.is_healthy());
    }

    #[test]
    fn test_error_discards_data_and_sets_message() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartDidFetchError(ApiError::Transport));

        assert!(state.data.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.error_message, TRANSPORT_FALLBACK);
    }

    #[test]
    fn test_error_is_idempotent() {
        let mut state = seeded();
        reducer(&mut state, CartAction::CartDidRemoveError(ApiError::Transport));
        let once = state.clone();
        reducer(&mut state, CartAction::CartDidRemoveError(ApiError::Transport));

        assert_eq!(state, once);
    }

    #[test]
    fn test_loading_and_error_never_hold_together() {
        let mut state = CartState::default();
        let actions = [
            CartAction::CartFetch,
            CartAction::CartDidFetchError(ApiError::Transport),
            CartAction::CartFetch,
            CartAction::CartDidFetch(vec![item(1, 1)]),
            CartAction::CartSetCount { id: 1, count: 2 },
            CartAction::CartDidSetCountError(ApiError::EmptyPayload),
            CartAction::CartRemove { id: 1 },
            CartAction::CartDidRemove { id: 1 },
        ];
        for action in actions {
            reducer(&mut state, action);
            assert!(
                !(state.is_loading && !state.error_message.is_empty()),
                "invariant broken: {state:?}"
            );
        }
    }
}
