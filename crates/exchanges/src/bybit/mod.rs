//! Bybit adapter
//!
//! V5 REST integration: market tickers for quotes and signed market
//! orders, HMAC-SHA256 request signing over the X-BAPI header scheme.

pub mod auth;
pub mod rest;

use crate::errors::Result;
use crate::traits::ExchangeAdapter;
use crate::types::{ExchangeId, Side};
use async_trait::async_trait;
use serde_json::Value;
use tradegate_core::Fixed;

pub use auth::{BybitCredentials, BybitSigner};
pub use rest::{BybitConfig, BybitRestClient};

/// Bybit venue adapter.
pub struct BybitAdapter {
    client: BybitRestClient,
}

impl BybitAdapter {
    pub fn new(config: BybitConfig) -> Result<Self> {
        Ok(Self {
            client: BybitRestClient::new(config)?,
        })
    }

    /// Direct access to the underlying REST client.
    pub fn client(&self) -> &BybitRestClient {
        &self.client
    }
}

#[async_trait(?Send)]
impl ExchangeAdapter for BybitAdapter {
    fn id(&self) -> ExchangeId {
        ExchangeId::Bybit
    }

    async fn fetch_price(&self, symbol: &str) -> Result<Value> {
        self.client.tickers(symbol).await
    }

    async fn place_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value> {
        self.client.market_order(symbol, side, quantity).await
    }
}
