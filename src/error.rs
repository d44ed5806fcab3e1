//! Probe error taxonomy.
//!
//! Every variant ends the run with a CRITICAL status. The printed line is
//! the error's `Display` text, so transport and domain variants render
//! their bare message.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that end a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The target service could not be reached in time.
    #[error("{0}")]
    ConnectionTimeout(String),

    /// The service rejected a query (auth failure, command error, bad reply).
    #[error("{0}")]
    ServiceOperation(String),

    /// An evaluator produced a failing verdict. Carries the full plugin line.
    #[error("{0}")]
    Unhealthy(String),

    /// Command-line configuration failed validation.
    #[error("Invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_print_verbatim() {
        let err = ProbeError::Unhealthy("Critical - Replica NOK!|replica_health=1;;0;;".into());
        assert_eq!(err.to_string(), "Critical - Replica NOK!|replica_health=1;;0;;");

        let err = ProbeError::ConnectionTimeout("localhost:27017: timed out".into());
        assert_eq!(err.to_string(), "localhost:27017: timed out");
    }

    #[test]
    fn test_invalid_config_lists_all_errors() {
        let err = ProbeError::InvalidConfig(vec![
            ValidationError::EmptyLatencyCommand,
            ValidationError::ZeroConnectTimeout,
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Invalid configuration: "));
        assert!(text.contains("latency command is empty"));
        assert!(text.contains("connect timeout must be greater than zero"));
    }
}
