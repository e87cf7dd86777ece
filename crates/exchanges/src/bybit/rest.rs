//! Bybit V5 REST client
//!
//! Market tickers and signed order creation over the monoio HTTPS
//! transport. Ticker payloads go back to the aggregator raw; order
//! responses go back to the caller raw.

use crate::bybit::auth::{BybitCredentials, BybitSigner};
use crate::errors::{ExchangeError, Result};
use crate::http::HttpsClient;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tradegate_core::prelude::*;
use tracing::debug;
use url::Url;

/// Bybit adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BybitConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub testnet: bool,
    pub recv_window_ms: u64,
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: "https://api.bybit.com".to_string(),
            testnet: false,
            recv_window_ms: 5000,
        }
    }
}

impl BybitConfig {
    pub fn testnet() -> Self {
        Self {
            base_url: "https://api-testnet.bybit.com".to_string(),
            testnet: true,
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, api_key: String, api_secret: String) -> Self {
        self.api_key = api_key;
        self.api_secret = api_secret;
        self
    }

    pub fn with_env_credentials(mut self) -> Result<Self> {
        let credentials = BybitCredentials::from_env()?;
        self.api_key = credentials.api_key;
        self.api_secret = credentials.api_secret;
        Ok(self)
    }
}

/// Bybit REST client over the monoio HTTPS transport.
pub struct BybitRestClient {
    config: BybitConfig,
    base_url: Url,
    https_client: HttpsClient,
}

impl BybitRestClient {
    pub fn new(config: BybitConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ExchangeError::InvalidUrl(e.to_string()))?;
        let https_client = HttpsClient::new()?;

        Ok(Self {
            config,
            base_url,
            https_client,
        })
    }

    /// Spot ticker payload for a symbol, raw.
    ///
    /// Success shape: `{"retCode":0,"result":{"list":[{"lastPrice":"60000.01",...}]}}`
    pub async fn tickers(&self, symbol: &str) -> Result<Value> {
        let timer = PerfTimer::start("bybit_get_tickers");

        let mut url = self.base_url.clone();
        url.set_path("/v5/market/tickers");
        url.query_pairs_mut()
            .append_pair("category", "spot")
            .append_pair("symbol", symbol);

        debug!("GET {}", url);
        let body = self
            .send(url.as_str(), "GET", None, &HashMap::new())
            .await?;

        timer.log_elapsed();

        serde_json::from_str(&body)
            .map_err(|e| ExchangeError::Serialization(format!("{e}: {body}")))
    }

    /// Place a signed market order.
    pub async fn market_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value> {
        let timer = PerfTimer::start("bybit_create_order");

        // Bybit wants title-case side tokens.
        let side_token = match side {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        };

        let body = json!({
            "category": "linear",
            "symbol": symbol,
            "side": side_token,
            "positionIdx": 0,
            "orderType": "Market",
            "qty": quantity.to_string(),
            "timeInForce": "GTC",
            "orderLinkId": ClientOrderId::new().to_string(),
        })
        .to_string();

        let signer = BybitSigner::new(BybitCredentials::new(
            self.config.api_key.clone(),
            self.config.api_secret.clone(),
        ))?;

        let timestamp = Timestamp::now().as_millis();
        let recv_window = self.config.recv_window_ms;
        let signature = signer.sign(timestamp, recv_window, &body)?;

        let timestamp_str = timestamp.to_string();
        let recv_window_str = recv_window.to_string();

        let mut headers = HashMap::new();
        headers.insert("X-BAPI-API-KEY", self.config.api_key.as_str());
        headers.insert("X-BAPI-SIGN", signature.as_str());
        headers.insert("X-BAPI-SIGN-TYPE", "2");
        headers.insert("X-BAPI-TIMESTAMP", timestamp_str.as_str());
        headers.insert("X-BAPI-RECV-WINDOW", recv_window_str.as_str());
        headers.insert("Content-Type", "application/json");

        let mut url = self.base_url.clone();
        url.set_path("/v5/order/create");

        debug!("POST {} (signed)", url);
        let response_body = self
            .send(url.as_str(), "POST", Some(&body), &headers)
            .await?;

        timer.log_elapsed();

        serde_json::from_str(&response_body)
            .map_err(|e| ExchangeError::Serialization(format!("{e}: {response_body}")))
    }

    async fn send(
        &self,
        url: &str,
        method: &str,
        body: Option<&str>,
        headers: &HashMap<&str, &str>,
    ) -> Result<String> {
        let response = self
            .https_client
            .request(method, url, body, headers)
            .await?;

        if !response.is_success() {
            return Err(ExchangeError::Http(response.status, response.body));
        }

        Ok(response.body)
    }
}
