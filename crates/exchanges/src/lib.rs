//! # tradegate exchange adapters
//!
//! Protocol adapters translating the gateway's normalized operations into
//! each exchange's wire protocol. Binance and Bybit are supported; both
//! expose the same [`ExchangeAdapter`] capability over a monoio-native
//! HTTPS transport.
//!
//! ## Architecture
//!
//! - **monoio-based HTTP client** - single-threaded async, rustls TLS
//! - **Per-exchange signing** - HMAC-SHA256, each adapter owns its scheme
//! - **Fixed-point arithmetic** - exact decimals for prices and quantities
//! - **Uniform capability** - raw payloads out, typed requests in

pub mod binance;
pub mod bybit;
pub mod errors;
pub mod http;
pub mod traits;
pub mod types;

// Re-export main types
pub use binance::BinanceAdapter;
pub use bybit::BybitAdapter;
pub use errors::{ExchangeError, Result};
pub use http::HttpsClient;
pub use traits::ExchangeAdapter;
pub use types::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::binance::{BinanceAdapter, BinanceConfig};
    pub use crate::bybit::{BybitAdapter, BybitConfig};
    pub use crate::errors::{ExchangeError, Result};
    pub use crate::http::HttpsClient;
    pub use crate::traits::ExchangeAdapter;
    pub use crate::types::*;
    pub use tradegate_core::prelude::*;
}
