//! Health-check probes for Icinga2-style monitoring.
//!
//! Two probes share one shape: read telemetry from a service, evaluate it
//! against thresholds, print one plugin line and exit OK (0) or
//! CRITICAL (2).
//!
//! - `check-mongodb`: replica set role of a mongod member
//! - `check-redis`: memory pressure and average latency of redis/keydb

pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod observability;
pub mod report;
pub mod runner;

pub use config::{CacheProbeConfig, ReplicaProbeConfig, Thresholds};
pub use error::{ProbeError, ProbeResult};
pub use report::{PluginOutput, ServiceState};
