//! Backend endpoint configuration
//!
//! One fixed base URL plus a path per resource. Paths are query-string
//! addressed for cart items (`?productId=`) and path addressed for
//! customers, mirroring the backend contract.

/// Default backend base URL; override with `STOREFRONT_API_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.shopfront-demo.dev";

/// Environment variable consulted by [`BackendConfig::from_env`].
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// Resolved backend endpoints for one storefront session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Create a config for the given base URL. A trailing slash is
    /// stripped so path joins stay predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` endpoint for the cart list.
    pub fn cart_url(&self) -> String {
        format!("{}/carts", self.base_url)
    }

    /// `DELETE`/`PATCH` endpoint for a single cart item.
    pub fn cart_item_url(&self, product_id: u64) -> String {
        format!("{}/carts?productId={}", self.base_url, product_id)
    }

    /// `GET` endpoint for the order list.
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    /// `PATCH`/`DELETE` endpoint for one customer.
    pub fn customer_url(&self, customer_id: u64) -> String {
        format!("{}/customers/{}", self.base_url, customer_id)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
