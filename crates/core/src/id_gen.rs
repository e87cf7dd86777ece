//! Client order ID generation
//!
//! Exchanges require a unique client-side identifier per order (Bybit's
//! `orderLinkId`, Binance's `newClientOrderId`). nanoid keeps these short
//! and collision-free without coordination.

use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::time::{SystemTime, UNIX_EPOCH};

/// Client-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientOrderId(String);

impl ClientOrderId {
    /// Generate a fresh identifier, capped at 36 characters to satisfy
    /// the stricter of the two exchanges.
    pub fn new() -> Self {
        let id = generate_id_with_prefix("TG");
        Self(id.replace('-', "").chars().take(36).collect())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ClientOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a unique 12-character nanoid.
pub fn generate_id() -> String {
    nanoid!(12)
}

/// Generate a unique ID with prefix and millisecond timestamp.
pub fn generate_id_with_prefix(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let short_id = nanoid!(8);
    format!("{prefix}-{timestamp}-{short_id}")
}
