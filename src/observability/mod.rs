//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client / health / runner
//!     → tracing events (stage, uri, healthy, latency_ms, ...)
//!     → logging.rs subscriber → stderr
//!
//! report
//!     → perfdata in the plugin line → stdout → supervisor
//! ```
//!
//! # Design Decisions
//! - Metrics reach the supervisor only as plugin perfdata
//! - Logging is quiet (warn) unless asked for

pub mod logging;
