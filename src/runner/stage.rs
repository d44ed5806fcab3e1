//! Probe run stages.
//!
//! ```text
//! Idle → Connected → Evaluated → Reported
//! ```
//! Any collaborator error or unhealthy verdict ends the run at the stage
//! where it happened; nothing is retried.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    Idle,
    Connected,
    Evaluated,
    Reported,
}

impl fmt::Display for ProbeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeStage::Idle => "idle",
            ProbeStage::Connected => "connected",
            ProbeStage::Evaluated => "evaluated",
            ProbeStage::Reported => "reported",
        };
        f.write_str(name)
    }
}
