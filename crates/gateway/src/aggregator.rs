//! Quote aggregation
//!
//! Queries every registered adapter for a price, normalizes each raw
//! payload by that exchange's extraction rule, and selects the best
//! available quote. Queries run sequentially in registration order and
//! any adapter failure aborts the whole pass: a best-price decision is
//! only made over a complete view of the venues.

use crate::errors::{GatewayError, Result};
use crate::Adapters;
use serde_json::Value;
use tradegate_core::prelude::*;
use tradegate_exchanges::types::{BestPrice, ExchangeId, PriceMode, Quote};
use tracing::debug;

/// Best-price selection over the registered adapter set.
pub struct QuoteAggregator {
    adapters: Adapters,
}

impl QuoteAggregator {
    pub fn new(adapters: Adapters) -> Self {
        Self { adapters }
    }

    /// Gather one quote per adapter, in registration order. Fail-fast: an
    /// adapter error propagates immediately and later adapters are not
    /// queried.
    pub async fn quotes(&self, symbol: &str) -> Result<Vec<Quote>> {
        let mut quotes = Vec::with_capacity(self.adapters.len());

        for adapter in self.adapters.iter() {
            let raw = adapter.fetch_price(symbol).await?;
            let price = normalize_price(adapter.id(), &raw);
            debug!("quote from {}: {:?}", adapter.id(), price);
            quotes.push(Quote {
                exchange: adapter.id(),
                price,
            });
        }

        Ok(quotes)
    }

    /// Best available price for a symbol: minimum across venues in
    /// `Lowest` mode, maximum in `Highest`. Fails with
    /// `NoQuotesAvailable` when no venue reported a usable price.
    pub async fn best_price(&self, symbol: &str, mode: PriceMode) -> Result<BestPrice> {
        let timer = PerfTimer::start("gateway_best_price");
        let quotes = self.quotes(symbol).await?;
        timer.log_elapsed();

        select_best(&quotes, mode).ok_or(GatewayError::NoQuotesAvailable)
    }
}

/// Extract the optional price from an exchange's raw payload.
///
/// The extraction rule is per-exchange business logic and lives here, not
/// in the adapters, so it can be tested against literal payloads. A
/// missing, null, unparseable, or negative value is an absent price, not
/// an error.
pub fn normalize_price(exchange: ExchangeId, raw: &Value) -> Option<Fixed> {
    let leaf = match exchange {
        // {"symbol":"BTCUSDT","price":"60000.01"}
        ExchangeId::Binance => raw.get("price"),
        // {"retCode":0,"result":{"list":[{"lastPrice":"60000.01",...}]}}
        ExchangeId::Bybit => raw
            .get("result")
            .and_then(|r| r.get("list"))
            .and_then(|l| l.get(0))
            .and_then(|entry| entry.get("lastPrice")),
    };

    leaf.and_then(value_to_price)
}

fn value_to_price(value: &Value) -> Option<Fixed> {
    let parsed = match value {
        Value::String(s) => Fixed::from_str_exact(s).ok(),
        Value::Number(n) => Fixed::from_str_exact(&n.to_string()).ok(),
        _ => None,
    };

    parsed.filter(|price| !price.is_negative())
}

/// Pick the winning quote. Strict comparison keeps the earliest adapter
/// in registration order on ties, so selection is deterministic.
fn select_best(quotes: &[Quote], mode: PriceMode) -> Option<BestPrice> {
    let mut best: Option<BestPrice> = None;

    for quote in quotes {
        let Some(price) = quote.price else { continue };

        let wins = match best {
            None => true,
            Some(current) => match mode {
                PriceMode::Lowest => price < current.price,
                PriceMode::Highest => price > current.price,
            },
        };

        if wins {
            best = Some(BestPrice {
                price,
                exchange: quote.exchange,
            });
        }
    }

    best
}
