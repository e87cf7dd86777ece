//! Adapter capability contract
//!
//! The uniform surface the aggregation and routing core requires from
//! every venue. Raw price payloads come back in the exchange's native
//! shape; normalization happens in the aggregator so it can be tested
//! against literal payloads without a live transport.

use crate::errors::Result;
use crate::types::{ExchangeId, Side};
use async_trait::async_trait;
use serde_json::Value;
use tradegate_core::Fixed;

/// Capability every exchange adapter must expose.
///
/// Futures are `?Send`: the whole gateway runs on one monoio thread.
#[async_trait(?Send)]
pub trait ExchangeAdapter {
    /// The venue this adapter speaks for.
    fn id(&self) -> ExchangeId;

    /// Fetch the current price payload for a symbol, in the exchange's
    /// native response shape.
    async fn fetch_price(&self, symbol: &str) -> Result<Value>;

    /// Submit a signed one-shot market order. The adapter maps `side` to
    /// the casing its wire protocol requires.
    async fn place_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value>;
}
