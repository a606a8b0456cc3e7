//! Error types
//!
//! Every remote failure is a `GatewayError`. The view-model does not
//! distinguish between the variants; they exist for the log line.

use thiserror::Error;

/// Result type for remote gateway calls
pub type SyncResult<T> = Result<T, GatewayError>;

/// A remote call failed
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network failure, CORS rejection, connection refused...
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-2xx status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON shape
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Draft rejected by the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    EmptyTitle,
    #[error("description is required")]
    EmptyDescription,
}

/// Invalid gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,
    #[error("collection name is empty")]
    EmptyCollection,
    #[error("base URL must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),
}
