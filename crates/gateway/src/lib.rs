//! # tradegate gateway core
//!
//! Multi-exchange quote aggregation and order routing. The
//! [`QuoteAggregator`] turns heterogeneous raw price payloads into one
//! best-price decision; the [`OrderRouter`] validates a market-order
//! request, resolves its destination venue, and dispatches it to exactly
//! one adapter. [`TradingGateway`] wires both over a concrete adapter set.

pub mod aggregator;
pub mod errors;
pub mod router;

#[cfg(test)]
pub(crate) mod testutil;

use std::rc::Rc;

use tradegate_exchanges::prelude::*;

pub use aggregator::QuoteAggregator;
pub use errors::{GatewayError, Result};
pub use router::OrderRouter;

/// Shared, immutable adapter set. Single-threaded monoio model, so `Rc`
/// rather than `Arc`; the set never changes for the life of the gateway.
pub type Adapters = Rc<Vec<Box<dyn ExchangeAdapter>>>;

/// Facade wiring the aggregation and routing core over a fixed adapter
/// set, mirroring the surface callers actually use.
pub struct TradingGateway {
    aggregator: QuoteAggregator,
    router: OrderRouter,
}

impl TradingGateway {
    /// Build a gateway over an explicit adapter set, in routing priority
    /// order.
    pub fn new(adapters: Vec<Box<dyn ExchangeAdapter>>) -> Self {
        let adapters: Adapters = Rc::new(adapters);
        Self {
            aggregator: QuoteAggregator::new(adapters.clone()),
            router: OrderRouter::new(adapters),
        }
    }

    /// Build a gateway over Binance and Bybit from explicit configs.
    /// Credential material never leaves the adapters.
    pub fn connect(binance: BinanceConfig, bybit: BybitConfig) -> Result<Self> {
        let adapters: Vec<Box<dyn ExchangeAdapter>> = vec![
            Box::new(BinanceAdapter::new(binance)?),
            Box::new(BybitAdapter::new(bybit)?),
        ];
        Ok(Self::new(adapters))
    }

    /// Best available price for a symbol across all venues.
    pub async fn best_price(&self, symbol: &str, mode: PriceMode) -> Result<BestPrice> {
        self.aggregator.best_price(symbol, mode).await
    }

    /// Route a one-shot market order to its destination venue.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt> {
        self.router.place_order(request).await
    }
}
