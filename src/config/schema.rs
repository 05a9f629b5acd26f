//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the backend.
//! Sections mirror the subsystems that consume them; the grouping is for
//! readability only, every field is resolved independently.

use std::time::Duration;

use serde::Serialize;

/// Root configuration for the backend service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ServiceConfig {
    /// Listener identity (bind host, ports, environment, version).
    pub server: ServerConfig,

    /// Kernel-bypass (XDP) networking settings.
    pub xdp: XdpConfig,

    /// NUMA placement and hugepage settings.
    pub numa: NumaConfig,

    /// Memory pool sizing.
    pub memory_pool: MemoryPoolConfig,

    /// Metrics exporter settings.
    pub metrics: MetricsConfig,

    /// Connection-level I/O timeouts.
    pub timeouts: TimeoutConfig,
}

/// Server identity and listener ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// HTTP listener port.
    pub port: i64,

    /// gRPC listener port.
    pub grpc_port: i64,

    /// Deployment environment name (read from `GO_ENV`).
    pub environment: String,

    /// Service version string.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            grpc_port: 50051,
            environment: "development".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// XDP configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XdpConfig {
    /// Attach XDP programs at startup.
    pub enabled: bool,

    /// Attach mode: "native", "skb" or "offload". Not checked here.
    pub mode: String,

    /// Network interface to attach to.
    pub interface: String,
}

impl Default for XdpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            // generic mode works on every driver
            mode: "skb".to_string(),
            interface: "eth0".to_string(),
        }
    }
}

/// NUMA and hugepage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct NumaConfig {
    /// Pin allocations and workers to a NUMA node.
    pub enabled: bool,

    /// Target NUMA node index; negative values pass through untouched.
    pub node_id: i64,

    /// Back the memory pool with hugepages.
    pub hugepages_enabled: bool,
}

/// Memory pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryPoolConfig {
    /// Number of slots in the pool.
    pub slots: i64,

    /// Size of each slot in bytes.
    pub slot_size: i64,

    /// Allocate every slot eagerly at startup.
    pub preallocate: bool,
}

impl Default for MemoryPoolConfig {
    fn default() -> Self {
        Self {
            slots: 1024,
            slot_size: 2048,
            preallocate: true,
        }
    }
}

impl MemoryPoolConfig {
    /// Total bytes the pool reserves (saturating).
    pub fn total_bytes(&self) -> i64 {
        self.slots.saturating_mul(self.slot_size)
    }
}

/// Metrics exporter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsConfig {
    /// Enable the metrics endpoint.
    pub enabled: bool,

    /// Metrics endpoint port.
    pub port: i64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 9090,
        }
    }
}

/// Timeout configuration for connection I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeoutConfig {
    /// Read timeout.
    #[serde(with = "humantime_serde")]
    pub read: Duration,

    /// Write timeout.
    #[serde(with = "humantime_serde")]
    pub write: Duration,

    /// Idle connection timeout.
    #[serde(with = "humantime_serde")]
    pub idle: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(30),
            write: Duration::from_secs(30),
            idle: Duration::from_secs(120),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_table() {
        let config = ServiceConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.grpc_port, 50051);
        assert_eq!(config.server.environment, "development");
        assert_eq!(config.server.version, "1.0.0");

        assert!(!config.xdp.enabled);
        assert_eq!(config.xdp.mode, "skb");
        assert_eq!(config.xdp.interface, "eth0");

        assert!(!config.numa.enabled);
        assert_eq!(config.numa.node_id, 0);
        assert!(!config.numa.hugepages_enabled);

        assert_eq!(config.memory_pool.slots, 1024);
        assert_eq!(config.memory_pool.slot_size, 2048);
        assert!(config.memory_pool.preallocate);

        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.port, 9090);

        assert_eq!(config.timeouts.read, Duration::from_secs(30));
        assert_eq!(config.timeouts.write, Duration::from_secs(30));
        assert_eq!(config.timeouts.idle, Duration::from_secs(120));
    }

    #[test]
    fn test_pool_total_bytes_saturates() {
        let pool = MemoryPoolConfig::default();
        assert_eq!(pool.total_bytes(), 1024 * 2048);

        let huge = MemoryPoolConfig {
            slots: i64::MAX,
            slot_size: 2,
            preallocate: false,
        };
        assert_eq!(huge.total_bytes(), i64::MAX);
    }

    #[test]
    fn test_timeouts_serialize_human_readable() {
        let json = serde_json::to_value(ServiceConfig::default()).unwrap();
        assert_eq!(json["timeouts"]["read"], "30s");
        assert_eq!(json["timeouts"]["idle"], "2m");
        assert_eq!(json["server"]["port"], 8080);
    }
}
