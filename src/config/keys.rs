//! Recognized environment variables.

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const GRPC_PORT: &str = "GRPC_PORT";
pub const ENVIRONMENT: &str = "GO_ENV";
pub const VERSION: &str = "VERSION";

pub const XDP_ENABLED: &str = "XDP_ENABLED";
pub const XDP_MODE: &str = "XDP_MODE";
pub const XDP_INTERFACE: &str = "XDP_INTERFACE";

pub const NUMA_ENABLED: &str = "NUMA_ENABLED";
pub const NUMA_NODE_ID: &str = "NUMA_NODE_ID";
pub const HUGEPAGES_ENABLED: &str = "HUGEPAGES_ENABLED";

pub const MEMORY_POOL_SLOTS: &str = "MEMORY_POOL_SLOTS";
pub const MEMORY_POOL_SLOT_SIZE: &str = "MEMORY_POOL_SLOT_SIZE";
pub const MEMORY_PREALLOCATE: &str = "MEMORY_PREALLOCATE";

pub const METRICS_ENABLED: &str = "METRICS_ENABLED";
pub const METRICS_PORT: &str = "METRICS_PORT";

pub const READ_TIMEOUT: &str = "READ_TIMEOUT";
pub const WRITE_TIMEOUT: &str = "WRITE_TIMEOUT";
pub const IDLE_TIMEOUT: &str = "IDLE_TIMEOUT";

/// How a variable's raw value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
    Duration,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Duration => "duration",
        }
    }
}

/// Documentation entry for one variable.
#[derive(Debug, Clone, Copy)]
pub struct VarSpec {
    pub name: &'static str,
    pub kind: ValueKind,
    /// Default, written the way an operator would export it.
    pub default: &'static str,
    pub description: &'static str,
}

const fn var(
    name: &'static str,
    kind: ValueKind,
    default: &'static str,
    description: &'static str,
) -> VarSpec {
    VarSpec {
        name,
        kind,
        default,
        description,
    }
}

/// Every variable the loader reads, in resolution order.
pub const VARIABLES: &[VarSpec] = &[
    var(HOST, ValueKind::String, "0.0.0.0", "Bind host"),
    var(PORT, ValueKind::Integer, "8080", "HTTP listener port"),
    var(GRPC_PORT, ValueKind::Integer, "50051", "gRPC listener port"),
    var(ENVIRONMENT, ValueKind::String, "development", "Deployment environment"),
    var(VERSION, ValueKind::String, "1.0.0", "Service version"),
    var(XDP_ENABLED, ValueKind::Boolean, "false", "Attach XDP programs"),
    var(XDP_MODE, ValueKind::String, "skb", "XDP attach mode (native, skb, offload)"),
    var(XDP_INTERFACE, ValueKind::String, "eth0", "XDP network interface"),
    var(NUMA_ENABLED, ValueKind::Boolean, "false", "Enable NUMA pinning"),
    var(NUMA_NODE_ID, ValueKind::Integer, "0", "Target NUMA node"),
    var(HUGEPAGES_ENABLED, ValueKind::Boolean, "false", "Back the memory pool with hugepages"),
    var(MEMORY_POOL_SLOTS, ValueKind::Integer, "1024", "Memory pool slot count"),
    var(MEMORY_POOL_SLOT_SIZE, ValueKind::Integer, "2048", "Memory pool slot size in bytes"),
    var(MEMORY_PREALLOCATE, ValueKind::Boolean, "true", "Preallocate the memory pool"),
    var(METRICS_ENABLED, ValueKind::Boolean, "true", "Enable the metrics exporter"),
    var(METRICS_PORT, ValueKind::Integer, "9090", "Metrics exporter port"),
    var(READ_TIMEOUT, ValueKind::Duration, "30s", "Connection read timeout"),
    var(WRITE_TIMEOUT, ValueKind::Duration, "30s", "Connection write timeout"),
    var(IDLE_TIMEOUT, ValueKind::Duration, "120s", "Idle connection timeout"),
];

/// Look up a variable by exact name.
pub fn lookup(name: &str) -> Option<&'static VarSpec> {
    VARIABLES.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = VARIABLES.iter().map(|v| v.name).collect();
        assert_eq!(names.len(), VARIABLES.len());
        assert_eq!(VARIABLES.len(), 19);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("GO_ENV").map(|v| v.kind), Some(ValueKind::String));
        assert!(lookup("go_env").is_none());
        assert!(lookup("ENVIRONMENT").is_none());
    }
}
