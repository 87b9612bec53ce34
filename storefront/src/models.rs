//! Entity models mirrored from the backend
//!
//! The stores treat these as opaque payloads; only `id` matters for
//! targeted update and delete. Wire format is camelCase JSON.

use serde::{Deserialize, Serialize};

/// One product in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub image_url: String,
    pub count: u32,
}

/// A past order with the items it contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    #[serde(rename = "orderDetails")]
    pub details: Vec<OrderItem>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub image_url: String,
    pub count: u32,
}

/// The signed-in customer.
///
/// The neutral default (all fields empty) doubles as the signed-out
/// state: an empty `access_token` means there is no session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub access_token: String,
}

impl User {
    /// True when no session is attached to this user.
    pub fn is_signed_out(&self) -> bool {
        self.access_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_format_is_camel_case() {
        let item: CartItem = serde_json::from_str(
            r#"{"id":1,"name":"tea","price":4500,"imageUrl":"https://img.test/tea.png","count":2}"#,
        )
        .unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.image_url, "https://img.test/tea.png");
        assert_eq!(item.count, 2);
    }

    #[test]
    fn test_order_wire_format() {
        let order: Order = serde_json::from_str(
            r#"{"id":10,"orderDetails":[{"id":1,"name":"tea","price":4500,"imageUrl":"","count":1}]}"#,
        )
        .unwrap();
        assert_eq!(order.id, 10);
        assert_eq!(order.details.len(), 1);
    }

    #[test]
    fn test_default_user_is_signed_out() {
        assert!(User::default().is_signed_out());
    }
}
