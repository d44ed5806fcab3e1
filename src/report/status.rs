//! Plugin status codes and final output.
//!
//! Status and exit codes come from `nagiosplugin`; the line itself is
//! printed verbatim because the dashboards parse its exact layout.

use nagiosplugin::ServiceState;

use crate::error::ProbeResult;

/// The single line a probe prints, and the status it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOutput {
    pub state: ServiceState,
    pub message: String,
}

impl PluginOutput {
    /// Every error kind maps to CRITICAL with its message as the line.
    pub fn from_result(result: ProbeResult<String>) -> Self {
        match result {
            Ok(message) => Self {
                state: ServiceState::Ok,
                message,
            },
            Err(e) => Self {
                state: ServiceState::Critical,
                message: e.to_string(),
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    pub fn print_and_exit(self) -> ! {
        tracing::debug!(state = %self.state, exit_code = self.exit_code(), "Reporting");
        println!("{}", self.message);
        std::process::exit(self.exit_code())
    }
}
