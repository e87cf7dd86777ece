//! CPU binding utilities
//!
//! Pinning the gateway thread to one core reduces context switching and
//! keeps quote/order latency consistent.

use tracing::{info, warn};

/// Bind the current thread to a specific CPU core.
pub fn bind_to_cpu_set(cpu_core: usize) -> Result<(), String> {
    #[cfg(feature = "cpu-binding")]
    {
        let core_ids = core_affinity::get_core_ids()
            .ok_or_else(|| "Failed to get CPU core IDs".to_string())?;

        if cpu_core >= core_ids.len() {
            return Err(format!(
                "CPU core {} not available (max: {})",
                cpu_core,
                core_ids.len() - 1
            ));
        }

        if core_affinity::set_for_current(core_ids[cpu_core]) {
            info!("bound to CPU core {}", cpu_core);
            Ok(())
        } else {
            Err(format!("Failed to bind to CPU core {cpu_core}"))
        }
    }

    #[cfg(not(feature = "cpu-binding"))]
    {
        let _ = cpu_core;
        warn!("CPU binding disabled (compile with --features cpu-binding)");
        Ok(())
    }
}

/// Number of available CPU cores.
pub fn get_cpu_count() -> usize {
    #[cfg(feature = "cpu-binding")]
    {
        core_affinity::get_core_ids()
            .map(|cores| cores.len())
            .unwrap_or(1)
    }

    #[cfg(not(feature = "cpu-binding"))]
    {
        num_cpus::get()
    }
}
