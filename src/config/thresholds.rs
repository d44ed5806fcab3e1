//! Threshold resolution.
//!
//! A flag that was not given and a flag given as `0` are the same thing:
//! both fall back to the built-in default. Nothing else is validated.

use crate::config::schema::{Thresholds, DEFAULT_MAX_LATENCY_MS, DEFAULT_MAX_MEMORY_FRACTION};

/// Pick the caller's value unless it is absent or zero.
pub fn resolve(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

impl Thresholds {
    /// Merge optional command-line overrides with the defaults.
    pub fn resolve(max_memory_usage: Option<f64>, max_latency: Option<f64>) -> Self {
        Self {
            max_memory_fraction: resolve(max_memory_usage, DEFAULT_MAX_MEMORY_FRACTION),
            max_latency_ms: resolve(max_latency, DEFAULT_MAX_LATENCY_MS),
        }
    }
}
