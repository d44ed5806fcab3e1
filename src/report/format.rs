//! Plugin output formatting.
//!
//! The layouts are fixed: dashboards already parse them, including the
//! double space left when a "high" marker is empty.

use crate::health::{HealthKind, HealthVerdict, ReplicationState, ServiceStats};

const REPLICA_PERFDATA: &str = "|replica_health=1;;0;;";

/// Render a float the way the dashboards expect: shortest round-trip
/// digits, always with a fractional part (`20.0`, `0.07`), and a signed
/// two-digit exponent when scientific (`1e-05`, `1.5e+16`).
pub fn plain_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

fn high_marker(healthy: bool) -> &'static str {
    if healthy { "" } else { "high" }
}

/// `Ok - Replica Primary|...` for healthy roles, `Critical - Replica NOK!|...` otherwise.
pub fn format_replica_message(state: &ReplicationState) -> String {
    match state {
        ReplicationState::Primary | ReplicationState::Secondary => {
            format!("Ok - Replica {}{}", state, REPLICA_PERFDATA)
        }
        ReplicationState::Other(_) => format!("Critical - Replica NOK!{}", REPLICA_PERFDATA),
    }
}

/// Summary plus perfdata for the memory and latency checks.
pub fn format_cache_message(
    stats: &ServiceStats,
    memory: &HealthVerdict,
    latency: &HealthVerdict,
) -> String {
    let used_human = format!("{}B", stats.used_memory_human);
    let max_human = format!("{}B", stats.max_memory_human);
    let allowed_human = match &memory.kind {
        HealthKind::Memory { allowed_human } => allowed_human.as_str(),
        _ => "",
    };
    let latency_ms = plain_float(latency.measured);

    format!(
        "{} memory usage: {} used of {} / {} average latency: {} ms\
         |used_memory={};;{};; average_latency={};;{};;",
        high_marker(memory.healthy),
        used_human,
        max_human,
        high_marker(latency.healthy),
        latency_ms,
        used_human,
        allowed_human,
        latency_ms,
        plain_float(latency.allowed_limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::{evaluate_latency, evaluate_memory};

    fn stats() -> ServiceStats {
        ServiceStats {
            used_memory_bytes: 6_312_408,
            used_memory_human: "6.02M".into(),
            max_memory_bytes: 3_854_827_520,
            max_memory_human: "3.59G".into(),
        }
    }

    #[test]
    fn test_plain_float() {
        assert_eq!(plain_float(20.0), "20.0");
        assert_eq!(plain_float(0.07), "0.07");
        assert_eq!(plain_float(25.0), "25.0");
        assert_eq!(plain_float(5.5), "5.5");
        assert_eq!(plain_float(0.0001), "0.0001");
    }

    #[test]
    fn test_plain_float_exponent_form() {
        assert_eq!(plain_float(0.00001), "1e-05");
        assert_eq!(plain_float(1.5e-7), "1.5e-07");
        assert_eq!(plain_float(1e16), "1e+16");
        assert_eq!(plain_float(2.5e100), "2.5e+100");
        assert_eq!(plain_float(-3e-9), "-3e-09");
        assert_eq!(plain_float(f64::NAN), "nan");
        assert_eq!(plain_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_cache_message_tiny_latency_threshold() {
        let stats = stats();
        let memory = evaluate_memory(&stats, 0.95).unwrap();
        let latency = evaluate_latency(0.07, 0.00001);
        let message = format_cache_message(&stats, &memory, &latency);
        assert!(message.ends_with(" average_latency=0.07;;1e-05;;"));
        assert!(message.contains("/ high average latency: 0.07 ms"));
    }

    #[test]
    fn test_replica_messages() {
        assert_eq!(
            format_replica_message(&ReplicationState::Primary),
            "Ok - Replica Primary|replica_health=1;;0;;"
        );
        assert_eq!(
            format_replica_message(&ReplicationState::Secondary),
            "Ok - Replica Secondary|replica_health=1;;0;;"
        );
        assert_eq!(
            format_replica_message(&ReplicationState::Other(0)),
            "Critical - Replica NOK!|replica_health=1;;0;;"
        );
    }

    #[test]
    fn test_cache_message_healthy() {
        let stats = stats();
        let memory = evaluate_memory(&stats, 0.95).unwrap();
        let latency = evaluate_latency(0.07, 20.0);
        assert_eq!(
            format_cache_message(&stats, &memory, &latency),
            " memory usage: 6.02MB used of 3.59GB /  average latency: 0.07 ms\
             |used_memory=6.02MB;;3.41GB;; average_latency=0.07;;20.0;;"
        );
    }

    #[test]
    fn test_cache_message_marks_each_failing_check() {
        let mut stats = stats();
        stats.used_memory_bytes = 3_800_000_000;
        stats.used_memory_human = "3.54G".into();
        let memory = evaluate_memory(&stats, 0.95).unwrap();
        let latency = evaluate_latency(25.0, 20.0);
        assert_eq!(
            format_cache_message(&stats, &memory, &latency),
            "high memory usage: 3.54GB used of 3.59GB / high average latency: 25.0 ms\
             |used_memory=3.54GB;;3.41GB;; average_latency=25.0;;20.0;;"
        );
    }
}
