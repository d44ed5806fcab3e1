use clap::Parser;

use service_probes::config::schema::{DEFAULT_LATENCY_COMMAND, DEFAULT_REDIS_URI};
use service_probes::observability::logging;
use service_probes::runner;
use service_probes::{CacheProbeConfig, PluginOutput, Thresholds};

#[derive(Parser)]
#[command(name = "check-redis")]
#[command(about = "Monitoring tool for Redis/KeyDB memory usage and latency", long_about = None)]
struct Cli {
    /// Fraction of maxmemory to alert at. Default is 0.95
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    max_memory_usage: Option<f64>,

    /// Max average latency in milliseconds to alert at. Default is 20.0
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    max_latency: Option<f64>,

    /// Connection string of the server to check
    #[arg(long, default_value = DEFAULT_REDIS_URI)]
    uri: String,

    /// Latency sampler; its third output token is the average in ms
    #[arg(long, default_value = DEFAULT_LATENCY_COMMAND)]
    latency_command: String,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 5)]
    connect_timeout: u64,

    /// Log filter for stderr (e.g. "debug")
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> CacheProbeConfig {
        CacheProbeConfig {
            uri: self.uri,
            thresholds: Thresholds::resolve(self.max_memory_usage, self.max_latency),
            latency_command: self.latency_command,
            connect_timeout_secs: self.connect_timeout,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = cli.into_config();
    tracing::debug!(
        uri = %config.uri,
        max_memory_fraction = config.thresholds.max_memory_fraction,
        max_latency_ms = config.thresholds.max_latency_ms,
        "Configuration loaded"
    );

    PluginOutput::from_result(runner::check_redis(&config).await).print_and_exit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CacheProbeConfig {
        Cli::try_parse_from(args.iter().copied()).unwrap().into_config()
    }

    #[test]
    fn test_no_flags_use_defaults() {
        let config = parse(&["check-redis"]);
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.uri, DEFAULT_REDIS_URI);
        assert_eq!(config.latency_command, DEFAULT_LATENCY_COMMAND);
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["check-redis", "-m", "0.8", "-l", "12.5"]);
        assert_eq!(config.thresholds.max_memory_fraction, 0.8);
        assert_eq!(config.thresholds.max_latency_ms, 12.5);
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&[
            "check-redis",
            "--max-memory-usage",
            "0.5",
            "--max-latency",
            "3",
            "--uri",
            "redis://10.0.0.5:6380",
            "--latency-command",
            "keydb-cli -h 10.0.0.5 -p 6380 --latency",
        ]);
        assert_eq!(config.thresholds.max_memory_fraction, 0.5);
        assert_eq!(config.thresholds.max_latency_ms, 3.0);
        assert_eq!(config.uri, "redis://10.0.0.5:6380");
        assert_eq!(config.latency_command, "keydb-cli -h 10.0.0.5 -p 6380 --latency");
    }

    #[test]
    fn test_zero_flags_mean_default() {
        let config = parse(&["check-redis", "-m", "0", "-l", "0.0"]);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_negative_thresholds_accepted() {
        let config = parse(&["check-redis", "-l", "-5", "-m", "-0.5"]);
        assert_eq!(config.thresholds.max_latency_ms, -5.0);
        assert_eq!(config.thresholds.max_memory_fraction, -0.5);
    }

    #[test]
    fn test_non_numeric_threshold_rejected() {
        assert!(Cli::try_parse_from(["check-redis", "-l", "fast"]).is_err());
    }
}
