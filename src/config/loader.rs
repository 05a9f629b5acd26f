//! Configuration loading from the environment.
//!
//! Every field is resolved on its own: look the variable up, parse it for
//! the field's type, and use the default when it is absent, empty or
//! malformed. Loading never fails and never logs; discarded values are
//! collected in a [`LoadReport`] for the caller to surface.

use std::time::Duration;

use crate::config::keys;
use crate::config::parse::{parse_bool, parse_duration, parse_int, ParseError};
use crate::config::schema::{
    MemoryPoolConfig, MetricsConfig, NumaConfig, ServerConfig, ServiceConfig, TimeoutConfig,
    XdpConfig,
};
use crate::config::source::{EnvSource, ProcessEnv};

/// A variable that was set but could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Fallback {
    /// Variable name.
    pub key: &'static str,
    /// Why the raw value was rejected.
    pub error: ParseError,
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}, using default", self.key, self.error)
    }
}

/// Result of a load: the configuration plus every value that was discarded.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub config: ServiceConfig,
    pub fallbacks: Vec<Fallback>,
}

impl LoadReport {
    /// True when every set variable was accepted.
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Resolve the full configuration from `source`, recording discarded values.
pub fn load<S: EnvSource + ?Sized>(source: &S) -> LoadReport {
    let defaults = ServiceConfig::default();
    let mut r = Resolver::new(source);

    let config = ServiceConfig {
        server: ServerConfig {
            host: r.string(keys::HOST, defaults.server.host),
            port: r.int(keys::PORT, defaults.server.port),
            grpc_port: r.int(keys::GRPC_PORT, defaults.server.grpc_port),
            environment: r.string(keys::ENVIRONMENT, defaults.server.environment),
            version: r.string(keys::VERSION, defaults.server.version),
        },
        xdp: XdpConfig {
            enabled: r.boolean(keys::XDP_ENABLED, defaults.xdp.enabled),
            mode: r.string(keys::XDP_MODE, defaults.xdp.mode),
            interface: r.string(keys::XDP_INTERFACE, defaults.xdp.interface),
        },
        numa: NumaConfig {
            enabled: r.boolean(keys::NUMA_ENABLED, defaults.numa.enabled),
            node_id: r.int(keys::NUMA_NODE_ID, defaults.numa.node_id),
            hugepages_enabled: r.boolean(
                keys::HUGEPAGES_ENABLED,
                defaults.numa.hugepages_enabled,
            ),
        },
        memory_pool: MemoryPoolConfig {
            slots: r.int(keys::MEMORY_POOL_SLOTS, defaults.memory_pool.slots),
            slot_size: r.int(keys::MEMORY_POOL_SLOT_SIZE, defaults.memory_pool.slot_size),
            preallocate: r.boolean(keys::MEMORY_PREALLOCATE, defaults.memory_pool.preallocate),
        },
        metrics: MetricsConfig {
            enabled: r.boolean(keys::METRICS_ENABLED, defaults.metrics.enabled),
            port: r.int(keys::METRICS_PORT, defaults.metrics.port),
        },
        timeouts: TimeoutConfig {
            read: r.duration(keys::READ_TIMEOUT, defaults.timeouts.read),
            write: r.duration(keys::WRITE_TIMEOUT, defaults.timeouts.write),
            idle: r.duration(keys::IDLE_TIMEOUT, defaults.timeouts.idle),
        },
    };

    LoadReport {
        config,
        fallbacks: r.fallbacks,
    }
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    /// Load from an arbitrary source.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Self {
        load(source).config
    }
}

struct Resolver<'a, S: ?Sized> {
    source: &'a S,
    fallbacks: Vec<Fallback>,
}

impl<'a, S: EnvSource + ?Sized> Resolver<'a, S> {
    fn new(source: &'a S) -> Self {
        Self {
            source,
            fallbacks: Vec::new(),
        }
    }

    /// Non-empty raw value for `key`; empty counts as unset.
    fn raw(&self, key: &str) -> Option<String> {
        self.source.get(key).filter(|v| !v.is_empty())
    }

    fn resolve<T>(
        &mut self,
        key: &'static str,
        default: T,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
    ) -> T {
        let Some(raw) = self.raw(key) else {
            return default;
        };
        match parse(&raw) {
            Ok(value) => value,
            Err(error) => {
                self.fallbacks.push(Fallback { key, error });
                default
            }
        }
    }

    fn string(&self, key: &'static str, default: String) -> String {
        self.raw(key).unwrap_or(default)
    }

    fn int(&mut self, key: &'static str, default: i64) -> i64 {
        self.resolve(key, default, parse_int)
    }

    fn boolean(&mut self, key: &'static str, default: bool) -> bool {
        self.resolve(key, default, parse_bool)
    }

    fn duration(&mut self, key: &'static str, default: Duration) -> Duration {
        self.resolve(key, default, parse_duration)
    }
}
