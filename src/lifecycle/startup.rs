//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration exactly once per process
//! - Log the effective settings and any discarded values
//! - Hand the snapshot to subsystems as `Arc<ServiceConfig>`
//!
//! # Design Decisions
//! - Bad values never block startup; they are logged and defaulted
//! - Raw values are not logged, only the variable name and the reason

use std::sync::{Arc, OnceLock};

use crate::config::{self, EnvSource, LoadReport, ProcessEnv, ServiceConfig};

static CONFIG: OnceLock<Arc<ServiceConfig>> = OnceLock::new();

/// Load the process configuration on first call and return the shared
/// snapshot. Later calls return the same `Arc` without re-reading the
/// environment.
pub fn init() -> Arc<ServiceConfig> {
    CONFIG
        .get_or_init(|| Arc::new(load_and_log(&ProcessEnv).config))
        .clone()
}

/// The snapshot stored by [`init`], if startup has happened.
pub fn current() -> Option<Arc<ServiceConfig>> {
    CONFIG.get().cloned()
}

/// Load from `source` and log the outcome.
pub fn load_and_log<S: EnvSource + ?Sized>(source: &S) -> LoadReport {
    let report = config::load(source);

    for fallback in &report.fallbacks {
        tracing::warn!(
            key = fallback.key,
            reason = %fallback.error,
            "Ignoring malformed environment value, using default"
        );
    }

    let config = &report.config;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        grpc_port = config.server.grpc_port,
        environment = %config.server.environment,
        version = %config.server.version,
        "Configuration loaded"
    );
    tracing::debug!(
        xdp_enabled = config.xdp.enabled,
        xdp_mode = %config.xdp.mode,
        xdp_interface = %config.xdp.interface,
        numa_enabled = config.numa.enabled,
        numa_node_id = config.numa.node_id,
        hugepages_enabled = config.numa.hugepages_enabled,
        pool_slots = config.memory_pool.slots,
        pool_slot_size = config.memory_pool.slot_size,
        pool_bytes = config.memory_pool.total_bytes(),
        pool_preallocate = config.memory_pool.preallocate,
        metrics_enabled = config.metrics.enabled,
        metrics_port = config.metrics.port,
        read_timeout = ?config.timeouts.read,
        write_timeout = ?config.timeouts.write,
        idle_timeout = ?config.timeouts.idle,
        "Tuning settings"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_loaded_once() {
        let first = init();
        let second = init();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(current().is_some_and(|c| Arc::ptr_eq(&c, &first)));
    }

    #[test]
    fn test_load_and_log_returns_report() {
        let report = load_and_log(&[("NUMA_NODE_ID", "x"), ("NUMA_ENABLED", "1")]);
        assert!(report.config.numa.enabled);
        assert_eq!(report.config.numa.node_id, 0);
        assert_eq!(report.fallbacks.len(), 1);
    }
}
