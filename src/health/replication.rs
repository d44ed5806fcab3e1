//! Replica set role evaluation.

use crate::health::types::{HealthKind, HealthVerdict, ReplicationState};

/// Primary and secondary members are healthy; every other state is not.
pub fn evaluate_replication(state: ReplicationState) -> HealthVerdict {
    let healthy = matches!(state, ReplicationState::Primary | ReplicationState::Secondary);

    HealthVerdict {
        healthy,
        measured: f64::from(state.code()),
        allowed_limit: 0.0,
        kind: HealthKind::Replication(state),
    }
}
