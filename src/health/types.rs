//! Telemetry and verdict types shared by the evaluators.

use std::fmt;

/// `myState` value of a primary member.
pub const PRIMARY_STATE: i32 = 1;

/// `myState` value of a secondary member.
pub const SECONDARY_STATE: i32 = 2;

/// Replication role reported by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicationState {
    Primary,
    Secondary,
    /// Any other member state (startup, recovering, arbiter, down...).
    Other(i32),
}

impl ReplicationState {
    pub fn from_code(code: i32) -> Self {
        match code {
            PRIMARY_STATE => ReplicationState::Primary,
            SECONDARY_STATE => ReplicationState::Secondary,
            other => ReplicationState::Other(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ReplicationState::Primary => PRIMARY_STATE,
            ReplicationState::Secondary => SECONDARY_STATE,
            ReplicationState::Other(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReplicationState::Primary => "Primary",
            ReplicationState::Secondary => "Secondary",
            ReplicationState::Other(_) => "NOK",
        }
    }
}

impl fmt::Display for ReplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Memory counters read from the cache server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    pub used_memory_bytes: u64,
    /// Server-formatted value, e.g. `6.02M`.
    pub used_memory_human: String,
    /// `0` means no limit is configured.
    pub max_memory_bytes: u64,
    /// Server-formatted value, e.g. `3.59G`.
    pub max_memory_human: String,
}

/// What a verdict was computed over.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthKind {
    Replication(ReplicationState),
    /// `allowed_human` is the display form of the limit, e.g. `3.41GB`.
    Memory { allowed_human: String },
    Latency,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthVerdict {
    pub healthy: bool,
    pub measured: f64,
    pub allowed_limit: f64,
    pub kind: HealthKind,
}
