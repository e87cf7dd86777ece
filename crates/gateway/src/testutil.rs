//! Mock adapters for exercising the aggregation and routing core without
//! a live transport.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tradegate_core::Fixed;
use tradegate_exchanges::errors::{ExchangeError, Result as ExchangeResult};
use tradegate_exchanges::types::{ExchangeId, Side};
use tradegate_exchanges::ExchangeAdapter;

/// Observation handle for a [`MockAdapter`]; stays with the test while
/// the adapter itself is boxed into the gateway.
#[derive(Clone, Default)]
pub struct MockHandle {
    pub price_calls: Rc<Cell<usize>>,
    pub order_calls: Rc<Cell<usize>>,
    pub last_order: Rc<RefCell<Option<(String, Side, Fixed)>>>,
}

/// Scripted adapter: fixed responses, call counting.
pub struct MockAdapter {
    id: ExchangeId,
    price_response: ExchangeResult<Value>,
    order_response: ExchangeResult<Value>,
    handle: MockHandle,
}

impl MockAdapter {
    /// Adapter whose raw payload carries the given price, in the shape
    /// that exchange actually returns.
    pub fn priced(id: ExchangeId, price: &str) -> (Self, MockHandle) {
        Self::with_raw_price(id, raw_price_payload(id, Some(price)))
    }

    /// Adapter whose raw payload carries no usable price.
    pub fn unpriced(id: ExchangeId) -> (Self, MockHandle) {
        Self::with_raw_price(id, raw_price_payload(id, None))
    }

    /// Adapter whose price fetch fails at the transport.
    pub fn failing(id: ExchangeId) -> (Self, MockHandle) {
        let handle = MockHandle::default();
        let adapter = Self {
            id,
            price_response: Err(ExchangeError::Network("connection refused".to_string())),
            order_response: Ok(order_payload(id)),
            handle: handle.clone(),
        };
        (adapter, handle)
    }

    fn with_raw_price(id: ExchangeId, raw: Value) -> (Self, MockHandle) {
        let handle = MockHandle::default();
        let adapter = Self {
            id,
            price_response: Ok(raw),
            order_response: Ok(order_payload(id)),
            handle: handle.clone(),
        };
        (adapter, handle)
    }
}

fn raw_price_payload(id: ExchangeId, price: Option<&str>) -> Value {
    match id {
        ExchangeId::Binance => match price {
            Some(p) => json!({"symbol": "BTCUSDT", "price": p}),
            None => json!({"symbol": "BTCUSDT"}),
        },
        ExchangeId::Bybit => json!({
            "retCode": 0,
            "result": {"list": [{"symbol": "BTCUSDT", "lastPrice": price}]}
        }),
    }
}

fn order_payload(id: ExchangeId) -> Value {
    json!({"exchange": id.to_string(), "status": "FILLED"})
}

#[async_trait(?Send)]
impl ExchangeAdapter for MockAdapter {
    fn id(&self) -> ExchangeId {
        self.id
    }

    async fn fetch_price(&self, _symbol: &str) -> ExchangeResult<Value> {
        self.handle.price_calls.set(self.handle.price_calls.get() + 1);
        self.price_response.clone()
    }

    async fn place_order(
        &self,
        symbol: &str,
        side: Side,
        quantity: Fixed,
    ) -> ExchangeResult<Value> {
        self.handle.order_calls.set(self.handle.order_calls.get() + 1);
        *self.handle.last_order.borrow_mut() = Some((symbol.to_string(), side, quantity));
        self.order_response.clone()
    }
}
