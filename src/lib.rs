//! Environment-driven startup configuration for the backend service.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use config::{EnvSource, ProcessEnv};
