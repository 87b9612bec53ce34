//! Failure taxonomy for backend requests
//!
//! Every request resolves into one of three kinds, and all three end the
//! same way: dispatched as an error action whose message is this error's
//! `Display` output. Nothing here escapes an effect runner as a raised
//! fault.

use thiserror::Error;

/// User-facing fallback when a request fails at the transport level.
pub const TRANSPORT_FALLBACK: &str = "A problem occurred. Please try again shortly.";

/// User-facing fallback when a successful response carries no usable data.
pub const EMPTY_PAYLOAD_FALLBACK: &str = "No saved information found. Please try again.";

/// Why a backend request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed or returned a non-success status.
    /// The transport's own message is logged, not shown.
    #[error("{}", TRANSPORT_FALLBACK)]
    Transport,

    /// Success status, but the body was missing or empty where data was
    /// expected.
    #[error("{}", EMPTY_PAYLOAD_FALLBACK)]
    EmptyPayload,

    /// The backend rejected the request with an explicit `message`
    /// field, surfaced verbatim instead of either fallback.
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// True when the message came from the backend rather than a local
    /// fallback.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server(_))
    }
}
