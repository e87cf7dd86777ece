//! End-to-end aggregation and routing flows through the public gateway
//! surface, over scripted in-process adapters. Implementing the adapter
//! here also pins the [`ExchangeAdapter`] trait as the extension seam for
//! new venues.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::Cell;
use std::rc::Rc;
use tradegate_core::Fixed;
use tradegate_exchanges::prelude::*;
use tradegate_gateway::{GatewayError, TradingGateway};

/// Adapter returning canned wire-shaped payloads, counting calls.
struct ScriptedAdapter {
    id: ExchangeId,
    price_payload: Value,
    orders: Rc<Cell<usize>>,
}

impl ScriptedAdapter {
    fn new(id: ExchangeId, price: &str) -> (Self, Rc<Cell<usize>>) {
        let price_payload = match id {
            ExchangeId::Binance => json!({"symbol": DEFAULT_SYMBOL, "price": price}),
            ExchangeId::Bybit => json!({
                "retCode": 0,
                "result": {"list": [{"symbol": DEFAULT_SYMBOL, "lastPrice": price}]}
            }),
        };
        let orders = Rc::new(Cell::new(0));
        let adapter = Self {
            id,
            price_payload,
            orders: orders.clone(),
        };
        (adapter, orders)
    }
}

#[async_trait(?Send)]
impl ExchangeAdapter for ScriptedAdapter {
    fn id(&self) -> ExchangeId {
        self.id
    }

    async fn fetch_price(&self, _symbol: &str) -> Result<Value> {
        Ok(self.price_payload.clone())
    }

    async fn place_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value> {
        self.orders.set(self.orders.get() + 1);
        Ok(json!({
            "exchange": self.id.to_string(),
            "symbol": symbol,
            "side": side.to_string(),
            "qty": quantity.to_string(),
            "orderStatus": "Filled",
        }))
    }
}

fn gateway(prices: [(&str, &str); 2]) -> (TradingGateway, Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let (binance, binance_orders) = ScriptedAdapter::new(ExchangeId::Binance, prices[0].1);
    let (bybit, bybit_orders) = ScriptedAdapter::new(ExchangeId::Bybit, prices[1].1);
    let gateway = TradingGateway::new(vec![Box::new(binance), Box::new(bybit)]);
    (gateway, binance_orders, bybit_orders)
}

fn fixed(s: &str) -> Fixed {
    Fixed::from_str_exact(s).unwrap()
}

#[monoio::test]
async fn test_best_price_spans_venues() {
    let (gateway, _, _) = gateway([("binance", "59950.10"), ("bybit", "60010.00")]);

    let lowest = gateway
        .best_price(DEFAULT_SYMBOL, PriceMode::Lowest)
        .await
        .unwrap();
    assert_eq!(lowest.exchange, ExchangeId::Binance);
    assert_eq!(lowest.price, fixed("59950.10"));

    let highest = gateway
        .best_price(DEFAULT_SYMBOL, PriceMode::Highest)
        .await
        .unwrap();
    assert_eq!(highest.exchange, ExchangeId::Bybit);
    assert_eq!(highest.price, fixed("60010.00"));
}

#[monoio::test]
async fn test_auto_routed_buy_hits_cheapest_venue_once() {
    let (gateway, binance_orders, bybit_orders) =
        gateway([("binance", "60100.00"), ("bybit", "60000.00")]);

    let request = OrderRequest::market(Side::Buy, fixed("0.002"));
    let receipt = gateway.place_order(&request).await.unwrap();

    assert_eq!(receipt["exchange"], "Bybit");
    assert_eq!(receipt["side"], "Buy");
    assert_eq!(receipt["qty"], "0.002");
    assert_eq!(bybit_orders.get(), 1);
    assert_eq!(binance_orders.get(), 0);
}

#[monoio::test]
async fn test_explicit_venue_skips_aggregation() {
    let (gateway, binance_orders, _) =
        gateway([("binance", "60100.00"), ("bybit", "60000.00")]);

    // Binance is the dearer venue; explicit routing ignores that.
    let request = OrderRequest::market(Side::Buy, fixed("0.002")).on_exchange(ExchangeId::Binance);
    let receipt = gateway.place_order(&request).await.unwrap();

    assert_eq!(receipt["exchange"], "Binance");
    assert_eq!(binance_orders.get(), 1);
}

#[monoio::test]
async fn test_invalid_quantity_is_terminal() {
    let (gateway, binance_orders, bybit_orders) =
        gateway([("binance", "60100.00"), ("bybit", "60000.00")]);

    let request = OrderRequest::market(Side::Sell, Fixed::ZERO);
    let err = gateway.place_order(&request).await.unwrap_err();

    assert!(matches!(err, GatewayError::InvalidQuantity(_)));
    assert_eq!(binance_orders.get(), 0);
    assert_eq!(bybit_orders.get(), 0);
}

#[monoio::test]
async fn test_receipt_is_raw_exchange_payload() {
    let (gateway, _, _) = gateway([("binance", "60100.00"), ("bybit", "60000.00")]);

    let request = OrderRequest::market(Side::Sell, fixed("0.5")).with_symbol("ETHUSDT");
    let receipt = gateway.place_order(&request).await.unwrap();

    // untouched adapter fields survive to the caller
    assert_eq!(receipt["orderStatus"], "Filled");
    assert_eq!(receipt["symbol"], "ETHUSDT");
}
