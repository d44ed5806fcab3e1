//! Service collaborators.
//!
//! # Responsibilities
//! - Open the network session to the target service
//! - Expose the few queries the evaluators need
//! - Translate driver errors into `ProbeError` kinds
//!
//! # Design Decisions
//! - One trait per capability so runners can be driven by scripted fakes
//! - No retries; a failed query is reported as-is
//! - Connect timeouts live here, never in the evaluators

pub mod cache;
pub mod latency;
pub mod mongo;

use async_trait::async_trait;

use crate::error::ProbeResult;
use crate::health::{ReplicationState, ServiceStats};

pub use cache::RedisStatsClient;
pub use latency::{parse_average_latency, CommandLatencyProbe};
pub use mongo::MongoReplicaClient;

/// Source of the replica set role of one database member.
#[async_trait]
pub trait ReplicaStateSource: Send + Sync {
    async fn replication_state(&self) -> ProbeResult<ReplicationState>;
}

/// Source of cache server memory counters.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn server_stats(&self) -> ProbeResult<ServiceStats>;
}

/// Takes one average-latency sample, in milliseconds.
#[async_trait]
pub trait LatencyProbe: Send + Sync {
    async fn average_latency_ms(&self) -> ProbeResult<f64>;
}
