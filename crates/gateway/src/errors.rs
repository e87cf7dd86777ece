//! Gateway error types
//!
//! Validation failures raised by the core plus adapter errors carried
//! through transparently. Every error is terminal for its call; the core
//! never retries and never substitutes a fallback price or venue.

use thiserror::Error;
use tradegate_core::Fixed;
use tradegate_exchanges::types::{ParseExchangeError, ParseSideError};
use tradegate_exchanges::ExchangeError;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Gateway operation errors
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// Order side is neither buy nor sell. Rejected before any call.
    #[error("Invalid side: {0} (must be Buy or Sell)")]
    InvalidSide(String),

    /// Exchange identifier not among the registered adapters. Rejected
    /// before dispatch.
    #[error("Invalid exchange: {0}")]
    InvalidExchange(String),

    /// Quantity is zero or negative. Rejected before any call.
    #[error("Invalid quantity: {0} (must be strictly positive)")]
    InvalidQuantity(Fixed),

    /// Every adapter responded but none carried a usable price.
    #[error("No quotes available")]
    NoQuotesAvailable,

    /// Adapter failure, propagated unchanged.
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

impl From<ParseSideError> for GatewayError {
    fn from(err: ParseSideError) -> Self {
        Self::InvalidSide(err.0)
    }
}

impl From<ParseExchangeError> for GatewayError {
    fn from(err: ParseExchangeError) -> Self {
        Self::InvalidExchange(err.0)
    }
}
