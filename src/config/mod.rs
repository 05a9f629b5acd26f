//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (or any EnvSource)
//!     → loader.rs (look up each variable)
//!     → parse.rs (typed parsing, failures become fallbacks)
//!     → ServiceConfig (fully populated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every field has a default so an empty environment is valid
//! - Malformed values are treated exactly like unset ones
//! - No cross-field checks; consumers own their own validation

pub mod keys;
pub mod loader;
pub mod parse;
pub mod schema;
pub mod source;

pub use loader::{load, Fallback, LoadReport};
pub use parse::ParseError;
pub use schema::ServiceConfig;
pub use schema::{
    MemoryPoolConfig, MetricsConfig, NumaConfig, ServerConfig, TimeoutConfig, XdpConfig,
};
pub use source::{EnvSource, ProcessEnv};
