//! Plugin output.
//!
//! # Data Flow
//! ```text
//! HealthVerdict(s)
//!     → format.rs (summary + `|` perfdata, fixed layout)
//!     → runner returns Ok(line) or Err(ProbeError)
//!     → status.rs (PluginOutput over nagiosplugin::ServiceState: OK=0 / CRITICAL=2)
//!     → stdout + process exit
//! ```

pub mod format;
pub mod status;

pub use format::{format_cache_message, format_replica_message, plain_float};
pub use nagiosplugin::ServiceState;
pub use status::PluginOutput;
