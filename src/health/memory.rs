//! Memory pressure evaluation.
//!
//! The pass/fail decision uses exact byte counts. The limit shown to the
//! operator is derived separately from the server's abbreviated
//! `maxmemory_human` string, so it can differ slightly from the byte limit.

use crate::error::{ProbeError, ProbeResult};
use crate::health::types::{HealthKind, HealthVerdict, ServiceStats};

/// Allowed bytes for `fraction` of `max_memory_bytes`.
pub fn memory_limit_bytes(stats: &ServiceStats, fraction: f64) -> f64 {
    fraction * stats.max_memory_bytes as f64
}

/// Scale a human memory string like `3.59G` by `fraction`, keeping its unit.
///
/// `("3.59G", 0.95)` gives `3.41GB`.
pub fn human_memory_limit(max_memory_human: &str, fraction: f64) -> ProbeResult<String> {
    let unit = max_memory_human.chars().last().ok_or_else(|| {
        ProbeError::ServiceOperation("empty maxmemory_human reported by server".to_string())
    })?;
    let number = &max_memory_human[..max_memory_human.len() - unit.len_utf8()];
    let value: f64 = number.parse().map_err(|_| {
        ProbeError::ServiceOperation(format!(
            "unexpected maxmemory_human '{}' reported by server",
            max_memory_human
        ))
    })?;

    Ok(format!("{:.2}{}B", value * fraction, unit))
}

/// Compare used memory against `fraction` of the configured maximum.
///
/// A `maxmemory` of 0 (no limit) yields a limit of 0 bytes, so any usage fails.
pub fn evaluate_memory(stats: &ServiceStats, fraction: f64) -> ProbeResult<HealthVerdict> {
    let allowed = memory_limit_bytes(stats, fraction);
    let allowed_human = human_memory_limit(&stats.max_memory_human, fraction)?;
    let used = stats.used_memory_bytes as f64;

    Ok(HealthVerdict {
        healthy: used <= allowed,
        measured: used,
        allowed_limit: allowed,
        kind: HealthKind::Memory { allowed_human },
    })
}
