//! Exchange adapter error types
//!
//! Every adapter failure surfaces as one of these variants and is
//! propagated to the caller unchanged; nothing below the gateway retries
//! or substitutes a fallback.

use thiserror::Error;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Adapter operation errors
#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    /// Transport-level failure: connect, TLS, read or write.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status. Status code and response body are preserved.
    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ExchangeError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
