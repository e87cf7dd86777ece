//! monoio-based async runtime wrapper
//!
//! Single-threaded async keeps the whole quote/route/dispatch path on one
//! core with no cross-thread synchronization.

use crate::cpu::bind_to_cpu_set;
use monoio::{IoUringDriver, RuntimeBuilder};
use tracing::{info, warn};

/// Runtime configuration for a gateway thread.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// CPU core to bind to (None for no binding)
    pub cpu_core: Option<usize>,
    /// Thread name
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            cpu_core: None,
            thread_name: "tradegate-main".to_string(),
        }
    }
}

/// Gateway runtime handle.
pub struct GatewayRuntime {
    config: RuntimeConfig,
}

impl GatewayRuntime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        if let Some(cpu_core) = config.cpu_core {
            if let Err(e) = bind_to_cpu_set(cpu_core) {
                warn!("Failed to bind to CPU core {}: {}", cpu_core, e);
            }
        }

        info!(
            "gateway runtime initialized (thread: {}, core: {:?})",
            config.thread_name, config.cpu_core
        );

        Self { config }
    }

    /// Run a future to completion on a fresh io_uring runtime.
    pub fn block_on<F>(&mut self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        let mut runtime = RuntimeBuilder::<IoUringDriver>::new()
            .build()
            .expect("Failed to create runtime");
        runtime.block_on(future)
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl Default for GatewayRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a runtime and run the given entry point until completion.
pub fn run_gateway<F, Fut>(f: F) -> Fut::Output
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let mut runtime = GatewayRuntime::new();
    runtime.block_on(f())
}
