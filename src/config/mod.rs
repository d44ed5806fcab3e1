//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command-line flags (clap, in src/bin)
//!     → thresholds.rs (explicit value or default)
//!     → schema.rs (ReplicaProbeConfig / CacheProbeConfig)
//!     → validation.rs (semantic checks)
//!     → passed by reference into the runner
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there is no config file
//! - Zero and absent thresholds are indistinguishable
//! - Validation separates syntactic (clap) from semantic checks

pub mod schema;
pub mod thresholds;
pub mod validation;

pub use schema::CacheProbeConfig;
pub use schema::ReplicaProbeConfig;
pub use schema::Thresholds;
pub use thresholds::resolve;
