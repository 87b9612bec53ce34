//! REST backend client
//!
//! [`StoreApi`] is the seam between effect runners and the network: the
//! real client talks HTTP through `reqwest`, tests substitute a fake.
//! Response interpretation is kept in pure `decode_*` helpers over
//! `(status, body)` so the failure taxonomy is testable without a live
//! server.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::models::{CartItem, Order};

/// One method per backend operation, each performing exactly one call.
///
/// Every method resolves to `Result<_, ApiError>`; callers convert the
/// outcome into a dispatched action and never re-raise.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /carts` - the full cart list.
    async fn cart_list(&self) -> Result<Vec<CartItem>, ApiError>;

    /// `DELETE /carts?productId={id}` - remove one cart item.
    async fn remove_cart_item(&self, product_id: u64) -> Result<(), ApiError>;

    /// `PATCH /carts?productId={id}` - update one item's count.
    async fn set_cart_count(&self, product_id: u64, count: u32) -> Result<(), ApiError>;

    /// `GET /orders` - the full order list.
    async fn order_list(&self) -> Result<Vec<Order>, ApiError>;

    /// `PATCH /customers/{id}` - change the username; returns the name
    /// the backend confirmed.
    async fn rename_customer(
        &self,
        customer_id: u64,
        access_token: &str,
        username: &str,
    ) -> Result<String, ApiError>;

    /// `DELETE /customers/{id}` - close the account.
    async fn delete_customer(
        &self,
        customer_id: u64,
        access_token: &str,
        password: &str,
    ) -> Result<(), ApiError>;
}

/// `reqwest`-backed [`StoreApi`] implementation.
pub struct HttpApi {
    http: reqwest::Client,
    config: BackendConfig,
}

impl HttpApi {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resolve a request into `(status, body text)`, folding transport
    /// failures into the generic fallback.
    async fn resolve(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let response = request.send().await.map_err(log_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(log_transport)?;
        Ok((status, body))
    }
}

#[async_trait]
impl StoreApi for HttpApi {
    async fn cart_list(&self) -> Result<Vec<CartItem>, ApiError> {
        let (status, body) = self.resolve(self.http.get(self.config.cart_url())).await?;
        decode_list(status, &body)
    }

    async fn remove_cart_item(&self, product_id: u64) -> Result<(), ApiError> {
        let url = self.config.cart_item_url(product_id);
        let (status, body) = self.resolve(self.http.delete(url)).await?;
        decode_ack(status, &body)
    }

    async fn set_cart_count(&self, product_id: u64, count: u32) -> Result<(), ApiError> {
        let url = self.config.cart_item_url(product_id);
        let request = self
            .http
            .patch(url)
            .json(&serde_json::json!({ "count": count }));
        let (status, body) = self.resolve(request).await?;
        decode_ack(status, &body)
    }

    async fn order_list(&self) -> Result<Vec<Order>, ApiError> {
        let (status, body) = self.resolve(self.http.get(self.config.orders_url())).await?;
        decode_list(status, &body)
    }

    async fn rename_customer(
        &self,
        customer_id: u64,
        access_token: &str,
        username: &str,
    ) -> Result<String, ApiError> {
        let request = self
            .http
            .patch(self.config.customer_url(customer_id))
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "username": username }));
        let (status, body) = self.resolve(request).await?;
        decode_rename(status, &body)
    }

    async fn delete_customer(
        &self,
        customer_id: u64,
        access_token: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.config.customer_url(customer_id))
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": password }));
        let (status, body) = self.resolve(request).await?;
        decode_ack(status, &body)
    }
}

fn log_transport(err: reqwest::Error) -> ApiError {
    // The transport's message is for logs; users see the fixed fallback.
    tracing::warn!(error = %err, "backend request failed");
    ApiError::Transport
}

/// Decode a list response: non-success status wins, then a missing or
/// null payload counts as empty.
fn decode_list<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Vec<T>, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Transport);
    }
    let value: Value = serde_json::from_str(body).map_err(|_| ApiError::EmptyPayload)?;
    if value.is_null() {
        return Err(ApiError::EmptyPayload);
    }
    serde_json::from_value(value).map_err(|_| ApiError::EmptyPayload)
}

/// Decode a write acknowledgement. A `message` field overrides the
/// status check: the backend's own words beat the generic fallback.
fn decode_ack(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if let Some(message) = server_message(body) {
        return Err(ApiError::Server(message));
    }
    if !status.is_success() {
        return Err(ApiError::Transport);
    }
    Ok(())
}

/// Decode a rename response into the confirmed username.
fn decode_rename(status: StatusCode, body: &str) -> Result<String, ApiError> {
    if let Some(message) = server_message(body) {
        return Err(ApiError::Server(message));
    }
    if !status.is_success() {
        return Err(ApiError::Transport);
    }
    let value: Value = serde_json::from_str(body).map_err(|_| ApiError::EmptyPayload)?;
    value
        .get("username")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ApiError::EmptyPayload)
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_success() {
        let body = r#"[{"id":1,"name":"tea","price":4500,"imageUrl":"","count":2}]"#;
        let items: Vec<CartItem> = decode_list(StatusCode::OK, body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_decode_list_non_success_is_transport() {
        let err = decode_list::<CartItem>(StatusCode::INTERNAL_SERVER_ERROR, "[]").unwrap_err();
        assert_eq!(err, ApiError::Transport);
    }

    #[test]
    fn test_decode_list_null_body_is_empty_payload() {
        let err = decode_list::<CartItem>(StatusCode::OK, "null").unwrap_err();
        assert_eq!(err, ApiError::EmptyPayload);

        let err = decode_list::<CartItem>(StatusCode::OK, "").unwrap_err();
        assert_eq!(err, ApiError::EmptyPayload);
    }

    #[test]
    fn test_decode_ack_success() {
        assert!(decode_ack(StatusCode::NO_CONTENT, "").is_ok());
    }

    #[test]
    fn test_decode_ack_failure_is_transport() {
        let err = decode_ack(StatusCode::BAD_REQUEST, "").unwrap_err();
        assert_eq!(err, ApiError::Transport);
    }

    #[test]
    fn test_decode_ack_server_message_beats_status() {
        // The backend's message is surfaced even on a success status.
        let err = decode_ack(StatusCode::OK, r#"{"message":"Cart is locked."}"#).unwrap_err();
        assert_eq!(err, ApiError::Server("Cart is locked.".into()));

        let err = decode_ack(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Session expired."}"#,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::Server("Session expired.".into()));
    }

    #[test]
    fn test_decode_rename_returns_confirmed_name() {
        let name = decode_rename(StatusCode::OK, r#"{"username":"newname"}"#).unwrap();
        assert_eq!(name, "newname");
    }

    #[test]
    fn test_decode_rename_server_message() {
        let err = decode_rename(StatusCode::OK, r#"{"message":"That username is taken."}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Server("That username is taken.".into()));
    }

    #[test]
    fn test_decode_rename_missing_username_is_empty_payload() {
        let err = decode_rename(StatusCode::OK, r#"{}"#).unwrap_err();
        assert_eq!(err, ApiError::EmptyPayload);
    }
}
