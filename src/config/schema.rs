//! Configuration schema definitions.
//!
//! Each probe builds its config once from the command line. The structs
//! are plain data; nothing mutates them after startup.

use std::time::Duration;

/// Default alert fraction of `maxmemory` (95%).
pub const DEFAULT_MAX_MEMORY_FRACTION: f64 = 0.95;

/// Default average latency alert threshold in milliseconds.
pub const DEFAULT_MAX_LATENCY_MS: f64 = 20.0;

/// Default target for the replica probe.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default target for the cache probe.
pub const DEFAULT_REDIS_URI: &str = "redis://127.0.0.1:6379";

/// Default external latency sampler.
pub const DEFAULT_LATENCY_COMMAND: &str = "keydb-cli --latency";

/// Effective thresholds for the cache probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Fraction of `maxmemory` above which memory usage alerts.
    pub max_memory_fraction: f64,

    /// Average latency (ms) above which latency alerts.
    pub max_latency_ms: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_memory_fraction: DEFAULT_MAX_MEMORY_FRACTION,
            max_latency_ms: DEFAULT_MAX_LATENCY_MS,
        }
    }
}

/// Replica set probe configuration.
#[derive(Debug, Clone)]
pub struct ReplicaProbeConfig {
    /// Connection string of the mongod to inspect.
    pub uri: String,

    /// User to authenticate as.
    pub user: String,

    /// Password for `user`.
    pub password: String,

    /// Server selection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl ReplicaProbeConfig {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            user: user.into(),
            password: password.into(),
            connect_timeout_secs: 30,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Cache probe configuration.
#[derive(Debug, Clone)]
pub struct CacheProbeConfig {
    /// Connection string of the redis/keydb server.
    pub uri: String,

    /// Resolved alert thresholds.
    pub thresholds: Thresholds,

    /// Command line of the latency sampler, split on whitespace.
    pub latency_command: String,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for CacheProbeConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_REDIS_URI.to_string(),
            thresholds: Thresholds::default(),
            latency_command: DEFAULT_LATENCY_COMMAND.to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl CacheProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
