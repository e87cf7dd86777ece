//! # tradegate core
//!
//! Core runtime and utility types for the tradegate multi-exchange gateway.
//!
//! ## Architecture principles
//!
//! 1. **Single-threaded async with monoio** - one runtime thread per gateway
//! 2. **CPU binding** - dedicated cores for latency-sensitive paths
//! 3. **Fixed-point arithmetic** - exact decimal calculations for money
//! 4. **Unified logging** - ftlog when available, tracing fallback
//! 5. **Efficient ID generation** - nanoid for client order identifiers

pub mod runtime;
pub mod timing;
pub mod fixed;
pub mod logging;
pub mod id_gen;
pub mod cpu;

// Re-export commonly used items
pub use runtime::GatewayRuntime;
pub use timing::{nanos, PerfTimer, Timestamp};
pub use fixed::Fixed;
pub use logging::init_logging;
pub use id_gen::{generate_id, ClientOrderId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::runtime::GatewayRuntime;
    pub use crate::timing::{nanos, PerfTimer, Timestamp};
    pub use crate::fixed::Fixed;
    pub use crate::id_gen::{generate_id, generate_id_with_prefix, ClientOrderId};
    pub use crate::logging::init_logging;
    pub use crate::cpu::{bind_to_cpu_set, get_cpu_count};

    // Common external types
    pub use monoio;
    pub use serde::{Deserialize, Serialize};
    pub use chrono::{DateTime, Utc};
}
