//! Health evaluation.
//!
//! # Data Flow
//! ```text
//! Replica probe:
//!     myState (client::mongo)
//!     → replication.rs → HealthVerdict
//!
//! Cache probe:
//!     INFO memory (client::redis) + thresholds
//!     → memory.rs → HealthVerdict (with display limit)
//!     latency sample (client::latency)
//!     → latency.rs → HealthVerdict
//! ```
//!
//! # Design Decisions
//! - Evaluators are pure functions over already-fetched telemetry
//! - Limits are inclusive: a value equal to the limit is healthy
//! - Verdicts live for a single run and are never stored

pub mod latency;
pub mod memory;
pub mod replication;
pub mod types;

pub use latency::{check_latency, evaluate_latency};
pub use memory::{evaluate_memory, human_memory_limit};
pub use replication::evaluate_replication;
pub use types::{HealthKind, HealthVerdict, ReplicationState, ServiceStats};
