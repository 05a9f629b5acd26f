//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read environment → Resolve config → Log → Store snapshot
//! ```
//!
//! # Design Decisions
//! - Config is loaded first, before any subsystem starts
//! - The snapshot lives for the whole process; there is no teardown

pub mod startup;

pub use startup::{current, init, load_and_log};
