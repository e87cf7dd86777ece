//! Unified logging setup
//!
//! Uses ftlog when the feature is enabled, otherwise falls back to a
//! tracing-subscriber with env-filter support. Safe to call repeatedly.

#[cfg(not(feature = "ftlog"))]
use tracing::Level;
#[cfg(not(feature = "ftlog"))]
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the gateway logging system.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(feature = "ftlog")]
        init_ftlog();

        #[cfg(not(feature = "ftlog"))]
        init_tracing();
    });
}

#[cfg(feature = "ftlog")]
fn init_ftlog() {
    ftlog::builder()
        .max_log_level(ftlog::LevelFilter::Debug)
        .bounded(100000, false) // 100k buffer, non-blocking
        .utc()
        .build()
        .expect("Failed to initialize ftlog");

    tracing::info!("initialized ftlog logging");
}

#[cfg(not(feature = "ftlog"))]
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    tracing::info!("initialized tracing logging (ftlog not available)");
}

/// Log a routed order at the moment of dispatch.
#[macro_export]
macro_rules! log_order {
    ($exchange:expr, $side:expr, $symbol:expr, $quantity:expr) => {
        tracing::info!(
            "ORDER {} {} {} on {}",
            $side,
            $quantity,
            $symbol,
            $exchange
        );
    };
}
