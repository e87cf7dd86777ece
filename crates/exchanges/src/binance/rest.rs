//! Binance REST client
//!
//! Spot market data and signed order placement over the monoio HTTPS
//! transport. Raw JSON comes back as `serde_json::Value`; interpretation
//! of price payloads is the aggregator's job.

use crate::binance::auth::{BinanceCredentials, BinanceSigner};
use crate::errors::{ExchangeError, Result};
use crate::http::HttpsClient;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tradegate_core::prelude::*;
use tracing::debug;
use url::Url;

/// Binance adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinanceConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub testnet: bool,
    pub recv_window_ms: u64,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: "https://api.binance.com".to_string(),
            testnet: false,
            recv_window_ms: 5000,
        }
    }
}

impl BinanceConfig {
    pub fn testnet() -> Self {
        Self {
            base_url: "https://testnet.binance.vision".to_string(),
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
        let credentials = BinanceCredentials::from_env()?;
        self.api_key = credentials.api_key;
        self.api_secret = credentials.secret_key;
        Ok(self)
    }
}

/// Binance REST client over the monoio HTTPS transport.
pub struct BinanceRestClient {
    config: BinanceConfig,
    base_url: Url,
    https_client: HttpsClient,
}

impl BinanceRestClient {
    pub fn new(config: BinanceConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ExchangeError::InvalidUrl(e.to_string()))?;
        let https_client = HttpsClient::new()?;

        Ok(Self {
            config,
            base_url,
            https_client,
        })
    }

    /// Test connectivity.
    pub async fn ping(&self) -> Result<()> {
        self.get_request("/api/v3/ping", &[]).await?;
        Ok(())
    }

    /// Server time in milliseconds.
    pub async fn server_time(&self) -> Result<u64> {
        let response = self.get_request("/api/v3/time", &[]).await?;

        response["serverTime"]
            .as_u64()
            .ok_or_else(|| ExchangeError::InvalidResponse("Missing serverTime".to_string()))
    }

    /// Current price ticker for a symbol, raw payload.
    ///
    /// Success shape: `{"symbol":"BTCUSDT","price":"60000.01"}`
    pub async fn price_ticker(&self, symbol: &str) -> Result<Value> {
        self.get_request("/api/v3/ticker/price", &[("symbol", symbol)])
            .await
    }

    /// Place a signed spot market order.
    pub async fn market_order(&self, symbol: &str, side: Side, quantity: Fixed) -> Result<Value> {
        // Binance wants upper-case side tokens.
        let side_token = match side {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        };

        let mut params = BTreeMap::new();
        params.insert("symbol", symbol.to_string());
        params.insert("side", side_token.to_string());
        params.insert("type", "MARKET".to_string());
        params.insert("quantity", quantity.to_string());
        params.insert("newClientOrderId", ClientOrderId::new().to_string());

        self.signed_request("/api/v3/order", "POST", params).await
    }

    async fn get_request(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let timer = PerfTimer::start(format!("binance_get_{endpoint}"));

        let mut url = self.base_url.clone();
        url.set_path(endpoint);
        if !params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        debug!("GET {}", url);
        let body = self.send(url.as_str(), "GET", &HashMap::new()).await?;

        timer.log_elapsed();

        serde_json::from_str(&body)
            .map_err(|e| ExchangeError::Serialization(format!("{e}: {body}")))
    }

    async fn signed_request(
        &self,
        endpoint: &str,
        method: &str,
        mut params: BTreeMap<&str, String>,
    ) -> Result<Value> {
        let timer = PerfTimer::start(format!("binance_signed_{endpoint}"));

        let signer = BinanceSigner::new(BinanceCredentials::new(
            self.config.api_key.clone(),
            self.config.api_secret.clone(),
        ))?;

        let timestamp = Timestamp::now().as_millis();
        params.insert("timestamp", timestamp.to_string());
        params.insert("recvWindow", self.config.recv_window_ms.to_string());

        let query_string = signer.build_query_string(&params);
        let signature = signer.sign(&query_string)?;

        let mut url = self.base_url.clone();
        url.set_path(endpoint);
        url.set_query(Some(&format!("{query_string}&signature={signature}")));

        debug!("{} {} (signed)", method, endpoint);

        let mut headers = HashMap::new();
        headers.insert("X-MBX-APIKEY", self.config.api_key.as_str());

        let body = self.send(url.as_str(), method, &headers).await?;

        timer.log_elapsed();

        serde_json::from_str(&body)
            .map_err(|e| ExchangeError::Serialization(format!("{e}: {body}")))
    }

    async fn send(
        &self,
        url: &str,
        method: &str,
        headers: &HashMap<&str, &str>,
    ) -> Result<String> {
        let response = self
            .https_client
            .request(method, url, None, headers)
            .await?;

        if !response.is_success() {
            return Err(ExchangeError::Http(response.status, response.body));
        }

        Ok(response.body)
    }
}
