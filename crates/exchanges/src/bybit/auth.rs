//! Bybit authentication and request signing
//!
//! V5 scheme: HMAC-SHA256 over `timestamp + api_key + recv_window +
//! payload`, where payload is the query string for GETs and the JSON body
//! for POSTs. The signature travels in the `X-BAPI-SIGN` header.

use crate::errors::{ExchangeError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Bybit API credentials
#[derive(Debug, Clone)]
pub struct BybitCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl BybitCredentials {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    /// Load credentials from BYBIT_API_KEY / BYBIT_SECRET_KEY.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("BYBIT_API_KEY")
            .map_err(|_| ExchangeError::MissingCredentials("BYBIT_API_KEY".to_string()))?;
        let api_secret = std::env::var("BYBIT_SECRET_KEY")
            .map_err(|_| ExchangeError::MissingCredentials("BYBIT_SECRET_KEY".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

/// Bybit request signer
pub struct BybitSigner {
    credentials: BybitCredentials,
}

impl BybitSigner {
    pub fn new(credentials: BybitCredentials) -> Result<Self> {
        if !credentials.is_valid() {
            return Err(ExchangeError::InvalidCredentials);
        }

        Ok(Self { credentials })
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Sign a request payload for the given millisecond timestamp and
    /// receive window.
    pub fn sign(&self, timestamp: u64, recv_window: u64, payload: &str) -> Result<String> {
        let message = format!(
            "{}{}{}{}",
            timestamp, self.credentials.api_key, recv_window, payload
        );

        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .map_err(|e| ExchangeError::Signing(format!("HMAC setup failed: {e}")))?;

        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
