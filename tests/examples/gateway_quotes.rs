//! Best-price aggregation demo against the Binance and Bybit testnets.
//!
//! Demonstrates:
//! - Multi-venue quote aggregation with per-exchange normalization
//! - Lowest/highest best-price selection
//! - Nanosecond precision timing around the quote pass

use tradegate_core::prelude::*;
use tradegate_exchanges::binance::BinanceRestClient;
use tradegate_exchanges::prelude::*;
use tradegate_gateway::TradingGateway;
use tracing::{error, info};

#[monoio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    info!("🚀 Starting tradegate quotes demo");

    // Bind to CPU core 0 for stable latency numbers
    if let Err(e) = bind_to_cpu_set(0) {
        error!("Failed to bind to CPU core 0: {}", e);
    }

    // Connectivity check against the Binance testnet before aggregating
    let binance = BinanceRestClient::new(BinanceConfig::testnet())?;
    let ping_timer = PerfTimer::start("connectivity_test");
    binance.ping().await?;
    let latency_us = ping_timer.elapsed_micros();
    ping_timer.log_elapsed();
    info!("🏓 Binance ping: {}μs, server time: {}", latency_us, binance.server_time().await?);

    // Quote endpoints are public, so no credentials are needed here
    let gateway = TradingGateway::connect(BinanceConfig::testnet(), BybitConfig::testnet())?;

    let timer = PerfTimer::start("quote_pass");
    let lowest = gateway.best_price(DEFAULT_SYMBOL, PriceMode::Lowest).await?;
    let highest = gateway
        .best_price(DEFAULT_SYMBOL, PriceMode::Highest)
        .await?;
    timer.log_elapsed();

    info!("📉 Lowest {}: {} on {}", DEFAULT_SYMBOL, lowest.price, lowest.exchange);
    info!("📈 Highest {}: {} on {}", DEFAULT_SYMBOL, highest.price, highest.exchange);

    Ok(())
}
