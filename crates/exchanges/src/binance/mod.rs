//! Binance adapter
//!
//! Spot REST integration: symbol price ticker for quotes and signed
//! market orders, HMAC-SHA256 request signing.

pub mod auth;
pub mod rest;

use crate::errors::Result;
use crate::traits::ExchangeAdapter;
use crate::types::{ExchangeId, Side};
use async_trait::async_trait;
use serde_json::Value;
use tradegate_core::Fixed;

pub use auth::{BinanceCredentials, BinanceSigner};
pub use rest::{BinanceConfig, BinanceRestClient};

/// Binance venue adapter.
pub struct BinanceAdapter {
    client: BinanceRestClient,
}

impl BinanceAdapter {
    pub fn new(config: BinanceConfig) -> Result<Self> {
        Ok(Self {
            client: BinanceRestClient::new(config)?,
        })
    }

    /// Direct access to the underlying REST client (connectivity checks).
    pub fn client(&self) -> &BinanceRestClient {
        &self.client
    }
}

#[async_trait(?Send)]
impl ExchangeAdapter for BinanceAdapter {
    fn id(&self) -> ExchangeId {
        ExchangeId::Binance
    }

    async fn fetch_price(&self, symbol: &str) -> Result<Value> {
        self.client.price_ticker(symbol).await
    }

    async fn place_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value> {
        self.client.market_order(symbol, side, quantity).await
    }
}
