//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Keep stdout free for the plugin line
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Events go to stderr; the supervisor only reads stdout
//! - Level comes from the `--log-level` flag, not the environment

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when no level flag is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter for `level`, scoped to this crate plus the drivers.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_from_flag() {
        assert_eq!(filter_for("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_bad_flag_falls_back_to_warn() {
        assert_eq!(
            filter_for("service_probes=loudest").max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("info");
        init("debug");
    }
}
