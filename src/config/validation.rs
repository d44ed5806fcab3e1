//! Configuration validation.
//!
//! # Responsibilities
//! - Check that target URIs parse and use a scheme the client understands
//! - Reject an empty latency command and a zero connect timeout
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Thresholds are not range-checked; zero already means "unset"
//! - Runs before any connection is opened

use std::fmt;

use url::Url;

use crate::config::schema::{CacheProbeConfig, ReplicaProbeConfig};

const MONGODB_SCHEMES: &[&str] = &["mongodb", "mongodb+srv"];
const REDIS_SCHEMES: &[&str] = &["redis", "rediss", "unix", "redis+unix"];

/// A single semantic problem with a probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidUri { uri: String, reason: String },
    UnsupportedScheme { uri: String, scheme: String },
    EmptyLatencyCommand,
    ZeroConnectTimeout,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUri { uri, reason } => {
                write!(f, "invalid uri '{}': {}", uri, reason)
            }
            ValidationError::UnsupportedScheme { uri, scheme } => {
                write!(f, "unsupported scheme '{}' in '{}'", scheme, uri)
            }
            ValidationError::EmptyLatencyCommand => write!(f, "latency command is empty"),
            ValidationError::ZeroConnectTimeout => {
                write!(f, "connect timeout must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn check_uri(uri: &str, schemes: &[&str], errors: &mut Vec<ValidationError>) {
    match Url::parse(uri) {
        Ok(url) if schemes.contains(&url.scheme()) => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme {
            uri: uri.to_string(),
            scheme: url.scheme().to_string(),
        }),
        Err(e) => errors.push(ValidationError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Validate the replica probe configuration.
pub fn validate_replica(config: &ReplicaProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_uri(&config.uri, MONGODB_SCHEMES, &mut errors);
    if config.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the cache probe configuration.
pub fn validate_cache(config: &CacheProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_uri(&config.uri, REDIS_SCHEMES, &mut errors);
    if config.latency_command.split_whitespace().next().is_none() {
        errors.push(ValidationError::EmptyLatencyCommand);
    }
    if config.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
