//! Integration tests for #[derive(Action)]

use shopfront::{Action, ActionCategory};

#[derive(shopfront::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
enum StoreAction {
    CartFetch,
    CartDidFetch(Vec<u64>),
    CartDidFetchError(String),
    CartRemove { id: u64 },
    UserRename { username: String },
    UserClearError,
    OrderFetch,
    #[action(category = "session")]
    Tick,
    #[action(skip_category)]
    CatalogFetch,
}

#[test]
fn name_returns_variant_name() {
    assert_eq!(StoreAction::CartFetch.name(), "CartFetch");
    assert_eq!(StoreAction::CartDidFetch(vec![]).name(), "CartDidFetch");
    assert_eq!(
        StoreAction::CartDidFetchError("boom".into()).name(),
        "CartDidFetchError"
    );
    assert_eq!(StoreAction::CartRemove { id: 1 }.name(), "CartRemove");
}

#[test]
fn categories_are_inferred_from_prefixes() {
    assert_eq!(StoreAction::CartFetch.category(), Some("cart"));
    assert_eq!(StoreAction::CartDidFetch(vec![]).category(), Some("cart"));
    assert_eq!(StoreAction::CartRemove { id: 1 }.category(), Some("cart"));
    assert_eq!(
        StoreAction::UserRename {
            username: "amy".into()
        }
        .category(),
        Some("user")
    );
    assert_eq!(StoreAction::UserClearError.category(), Some("user"));
    assert_eq!(StoreAction::OrderFetch.category(), Some("order"));
}

#[test]
fn explicit_category_overrides_inference() {
    assert_eq!(StoreAction::Tick.category(), Some("session"));
}

#[test]
fn skip_category_leaves_variant_uncategorized() {
    assert_eq!(StoreAction::CatalogFetch.category(), None);
}

#[derive(shopfront::Action, Clone, Debug)]
enum PlainAction {
    CartFetch,
}

#[test]
fn categories_default_to_none_without_inference() {
    assert_eq!(PlainAction::CartFetch.category(), None);
}
