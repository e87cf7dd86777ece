//! Shared gateway domain types
//!
//! Typed side/exchange identifiers plus the quote and order shapes the
//! aggregation and routing core operates on. Raw exchange payloads stay
//! `serde_json::Value` end to end; only the price is ever interpreted.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tradegate_core::Fixed;

/// Default trading pair when a request does not name one.
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// The fixed set of supported venues, in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeId {
    Binance,
    Bybit,
}

impl ExchangeId {
    /// All supported exchanges, in the order quotes are gathered and ties
    /// are broken.
    pub const ALL: [ExchangeId; 2] = [ExchangeId::Binance, ExchangeId::Bybit];
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeId::Binance => write!(f, "Binance"),
            ExchangeId::Bybit => write!(f, "Bybit"),
        }
    }
}

/// Unrecognized exchange name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid exchange name: {0}")]
pub struct ParseExchangeError(pub String);

impl FromStr for ExchangeId {
    type Err = ParseExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binance" => Ok(ExchangeId::Binance),
            "bybit" => Ok(ExchangeId::Bybit),
            _ => Err(ParseExchangeError(s.to_string())),
        }
    }
}

/// Order side, normalized at the router boundary. Adapters map this to
/// whatever casing their wire protocol wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// Side token that is neither buy nor sell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order side: {0}")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Quote comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    /// Best price to buy at: the minimum across venues.
    Lowest,
    /// Best price to sell at: the maximum across venues.
    Highest,
}

/// One exchange's reported price for a symbol at call time. `price` is
/// absent when the raw response carried no usable price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub exchange: ExchangeId,
    pub price: Option<Fixed>,
}

/// Winning quote of an aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestPrice {
    pub price: Fixed,
    pub exchange: ExchangeId,
}

/// A one-shot market order to be routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub side: Side,
    pub symbol: String,
    pub quantity: Fixed,
    /// Destination venue; auto-resolved to the best-priced one when absent.
    pub exchange: Option<ExchangeId>,
}

impl OrderRequest {
    /// Market order for the default symbol, destination auto-resolved.
    pub fn market(side: Side, quantity: Fixed) -> Self {
        Self {
            side,
            symbol: DEFAULT_SYMBOL.to_string(),
            quantity,
            exchange: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn on_exchange(mut self, exchange: ExchangeId) -> Self {
        self.exchange = Some(exchange);
        self
    }
}

/// Opaque per-exchange order response, passed through to the caller
/// unmodified.
pub type OrderReceipt = serde_json::Value;
