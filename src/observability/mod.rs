//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup wiring (lifecycle::startup)
//!     → logging.rs (structured log events)
//!     → stderr (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - The config loader never logs; whoever calls it decides what to emit
//! - Structured fields (key, reason) instead of formatted sentences

pub mod logging;

pub use logging::LogFormat;
