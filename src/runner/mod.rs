//! Probe runners.
//!
//! # Responsibilities
//! - Drive one probe through its stages against the collaborators
//! - Turn verdicts into the plugin line
//! - Return `Err(ProbeError::Unhealthy(line))` when any check fails
//!
//! # Design Decisions
//! - Single pass: no loops, no retries
//! - Collaborators are generic so tests can script them
//! - The cache probe samples latency even when memory already failed,
//!   so the line always carries both values

pub mod stage;

pub use stage::ProbeStage;

use crate::client::{
    CommandLatencyProbe, LatencyProbe, MongoReplicaClient, RedisStatsClient, ReplicaStateSource,
    StatsSource,
};
use crate::config::validation::{validate_cache, validate_replica};
use crate::config::{CacheProbeConfig, ReplicaProbeConfig, Thresholds};
use crate::error::{ProbeError, ProbeResult};
use crate::health::{check_latency, evaluate_memory, evaluate_replication};
use crate::report::{format_cache_message, format_replica_message};

fn enter(stage: ProbeStage) {
    tracing::debug!(%stage, "Probe stage");
}

/// Read the replica role once and report it.
pub async fn run_replica_probe<S>(source: &S) -> ProbeResult<String>
where
    S: ReplicaStateSource + ?Sized,
{
    let state = source.replication_state().await?;
    enter(ProbeStage::Connected);

    let verdict = evaluate_replication(state);
    enter(ProbeStage::Evaluated);
    tracing::info!(state = state.code(), healthy = verdict.healthy, "Replica evaluated");

    let message = format_replica_message(&state);
    enter(ProbeStage::Reported);

    if verdict.healthy {
        Ok(message)
    } else {
        Err(ProbeError::Unhealthy(message))
    }
}

/// Check memory pressure and latency once and report both.
pub async fn run_cache_probe<S, L>(
    stats_source: &S,
    latency_probe: &L,
    thresholds: &Thresholds,
) -> ProbeResult<String>
where
    S: StatsSource + ?Sized,
    L: LatencyProbe + ?Sized,
{
    let stats = stats_source.server_stats().await?;
    enter(ProbeStage::Connected);

    let memory = evaluate_memory(&stats, thresholds.max_memory_fraction)?;
    let latency = check_latency(latency_probe, thresholds.max_latency_ms).await?;
    enter(ProbeStage::Evaluated);
    tracing::info!(
        memory_healthy = memory.healthy,
        used_memory = memory.measured,
        allowed_memory = memory.allowed_limit,
        latency_healthy = latency.healthy,
        latency_ms = latency.measured,
        "Cache evaluated"
    );

    let message = format_cache_message(&stats, &memory, &latency);
    enter(ProbeStage::Reported);

    if memory.healthy && latency.healthy {
        Ok(message)
    } else {
        Err(ProbeError::Unhealthy(message))
    }
}

/// Validate, connect to MongoDB and run the replica probe.
pub async fn check_mongodb(config: &ReplicaProbeConfig) -> ProbeResult<String> {
    enter(ProbeStage::Idle);
    validate_replica(config).map_err(ProbeError::InvalidConfig)?;

    let client = MongoReplicaClient::connect(config).await?;
    run_replica_probe(&client).await
}

/// Validate, connect to Redis/KeyDB and run the cache probe.
pub async fn check_redis(config: &CacheProbeConfig) -> ProbeResult<String> {
    enter(ProbeStage::Idle);
    validate_cache(config).map_err(ProbeError::InvalidConfig)?;

    let client = RedisStatsClient::connect(config).await?;
    let latency = CommandLatencyProbe::from_config(config)?;
    run_cache_probe(&client, &latency, &config.thresholds).await
}
