//! Latency evaluation.

use crate::client::LatencyProbe;
use crate::error::ProbeResult;
use crate::health::types::{HealthKind, HealthVerdict};

/// Healthy while the sample does not exceed `max_latency_ms`.
pub fn evaluate_latency(measured_ms: f64, max_latency_ms: f64) -> HealthVerdict {
    HealthVerdict {
        healthy: measured_ms <= max_latency_ms,
        measured: measured_ms,
        allowed_limit: max_latency_ms,
        kind: HealthKind::Latency,
    }
}

/// Take one latency sample from `probe` and evaluate it. Blocks for the
/// duration of the sampler run.
pub async fn check_latency<P>(probe: &P, max_latency_ms: f64) -> ProbeResult<HealthVerdict>
where
    P: LatencyProbe + ?Sized,
{
    let measured = probe.average_latency_ms().await?;
    tracing::debug!(latency_ms = measured, max_latency_ms, "Latency sampled");
    Ok(evaluate_latency(measured, max_latency_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(f64);

    #[async_trait]
    impl LatencyProbe for Fixed {
        async fn average_latency_ms(&self) -> ProbeResult<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(evaluate_latency(20.0, 20.0).healthy);
        assert!(!evaluate_latency(20.01, 20.0).healthy);
        assert!(evaluate_latency(0.07, 20.0).healthy);
    }

    #[tokio::test]
    async fn test_check_latency_uses_probe() {
        let verdict = check_latency(&Fixed(25.0), 20.0).await.unwrap();
        assert!(!verdict.healthy);
        assert_eq!(verdict.measured, 25.0);
        assert_eq!(verdict.allowed_limit, 20.0);
    }
}
