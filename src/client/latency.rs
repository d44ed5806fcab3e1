//! Latency sampling through an external command.
//!
//! The sampler (`keydb-cli --latency` by default) prints
//! `min max avg samples` when its output is not a terminal. The third
//! token is the average in milliseconds; the exit status is ignored.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::client::LatencyProbe;
use crate::config::CacheProbeConfig;
use crate::error::{ProbeError, ProbeResult};

/// Runs a latency sampler subprocess and parses its output.
#[derive(Debug, Clone)]
pub struct CommandLatencyProbe {
    program: String,
    args: Vec<String>,
}

impl CommandLatencyProbe {
    /// Split `command` on whitespace into program and arguments.
    pub fn new(command: &str) -> ProbeResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| ProbeError::ServiceOperation("latency command is empty".to_string()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn from_config(config: &CacheProbeConfig) -> ProbeResult<Self> {
        Self::new(&config.latency_command)
    }
}

#[async_trait]
impl LatencyProbe for CommandLatencyProbe {
    async fn average_latency_ms(&self) -> ProbeResult<f64> {
        tracing::debug!(program = %self.program, args = ?self.args, "Running latency sampler");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ProbeError::ServiceOperation(format!(
                    "failed to run latency command '{}': {}",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            tracing::warn!(status = %output.status, "Latency sampler exited with failure");
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            ProbeError::ServiceOperation("latency command produced non UTF-8 output".to_string())
        })?;

        parse_average_latency(&stdout)
    }
}

/// Read the average latency (third whitespace token) from sampler output.
pub fn parse_average_latency(output: &str) -> ProbeResult<f64> {
    let token = output.split_whitespace().nth(2).ok_or_else(|| {
        ProbeError::ServiceOperation(format!("unexpected latency output '{}'", output.trim()))
    })?;

    token
        .parse()
        .map_err(|_| ProbeError::ServiceOperation(format!("invalid average latency '{}'", token)))
}
