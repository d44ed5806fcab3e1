//! Scripted collaborators for runner tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use service_probes::client::{LatencyProbe, ReplicaStateSource, StatsSource};
use service_probes::health::{ReplicationState, ServiceStats};
use service_probes::{ProbeError, ProbeResult};

/// What a scripted collaborator should do when called.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Script<T> {
    Reply(T),
    Timeout(&'static str),
    Reject(&'static str),
}

impl<T: Clone> Script<T> {
    fn play(&self) -> ProbeResult<T> {
        match self {
            Script::Reply(value) => Ok(value.clone()),
            Script::Timeout(msg) => Err(ProbeError::ConnectionTimeout(msg.to_string())),
            Script::Reject(msg) => Err(ProbeError::ServiceOperation(msg.to_string())),
        }
    }
}

/// Replica state source returning a fixed `myState` code.
#[allow(dead_code)]
pub struct FakeReplica(pub Script<i32>);

#[async_trait]
impl ReplicaStateSource for FakeReplica {
    async fn replication_state(&self) -> ProbeResult<ReplicationState> {
        self.0.play().map(ReplicationState::from_code)
    }
}

#[allow(dead_code)]
pub struct FakeStats(pub Script<ServiceStats>);

#[async_trait]
impl StatsSource for FakeStats {
    async fn server_stats(&self) -> ProbeResult<ServiceStats> {
        self.0.play()
    }
}

/// Latency probe that counts how often it was sampled.
#[allow(dead_code)]
pub struct FakeLatency {
    pub script: Script<f64>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeLatency {
    pub fn new(script: Script<f64>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LatencyProbe for FakeLatency {
    async fn average_latency_ms(&self) -> ProbeResult<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script.play()
    }
}

/// 6.02M used of a 3.59G limit.
#[allow(dead_code)]
pub fn idle_cache_stats() -> ServiceStats {
    ServiceStats {
        used_memory_bytes: 6_312_408,
        used_memory_human: "6.02M".into(),
        max_memory_bytes: 3_854_827_520,
        max_memory_human: "3.59G".into(),
    }
}
