//! Order routing
//!
//! Validates a market-order request, resolves its destination venue, and
//! dispatches it to exactly one adapter. Validation failures reject the
//! request before any adapter or aggregator call is made; once dispatched,
//! the adapter's receipt is returned to the caller unmodified.

use crate::errors::{GatewayError, Result};
use crate::{Adapters, QuoteAggregator};
use tradegate_core::log_order;
use tradegate_exchanges::types::{ExchangeId, OrderReceipt, OrderRequest, PriceMode, Side};
use tradegate_exchanges::ExchangeAdapter;
use tracing::debug;

/// Market-order dispatch over the registered adapter set.
pub struct OrderRouter {
    adapters: Adapters,
    aggregator: QuoteAggregator,
}

impl OrderRouter {
    pub fn new(adapters: Adapters) -> Self {
        let aggregator = QuoteAggregator::new(adapters.clone());
        Self {
            adapters,
            aggregator,
        }
    }

    /// Route a one-shot market order.
    ///
    /// The destination is the request's explicit exchange when present,
    /// otherwise the venue currently quoting the best price for the
    /// request's side: lowest for a buy, highest for a sell. The request
    /// is dispatched to exactly one adapter and the raw receipt is passed
    /// through.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt> {
        if !request.quantity.is_positive() {
            return Err(GatewayError::InvalidQuantity(request.quantity));
        }

        let destination = match request.exchange {
            Some(exchange) => exchange,
            None => self.resolve_destination(request).await?,
        };

        let adapter = self
            .adapter_for(destination)
            .ok_or_else(|| GatewayError::InvalidExchange(destination.to_string()))?;

        log_order!(destination, request.side, &request.symbol, request.quantity);
        let receipt = adapter
            .place_order(&request.symbol, request.side, request.quantity)
            .await?;

        Ok(receipt)
    }

    /// Pick the venue with the best price for the request's side. Buying
    /// routes to the cheapest venue, selling to the dearest.
    async fn resolve_destination(&self, request: &OrderRequest) -> Result<ExchangeId> {
        let mode = match request.side {
            Side::Buy => PriceMode::Lowest,
            Side::Sell => PriceMode::Highest,
        };

        let best = self.aggregator.best_price(&request.symbol, mode).await?;
        debug!(
            "resolved {} {} to {} at {}",
            request.side, request.symbol, best.exchange, best.price
        );

        Ok(best.exchange)
    }

    fn adapter_for(&self, id: ExchangeId) -> Option<&dyn ExchangeAdapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.id() == id)
            .map(|adapter| adapter.as_ref())
    }
}
