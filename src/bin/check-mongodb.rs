use clap::Parser;

use service_probes::config::schema::DEFAULT_MONGODB_URI;
use service_probes::observability::logging;
use service_probes::runner;
use service_probes::{PluginOutput, ReplicaProbeConfig};

#[derive(Parser)]
#[command(name = "check-mongodb")]
#[command(about = "Monitoring tool for MongoDB replica sets", long_about = None)]
struct Cli {
    /// MongoDB root user
    #[arg(short, long)]
    user: String,

    /// MongoDB password
    #[arg(short, long)]
    password: String,

    /// Connection string of the member to check
    #[arg(long, default_value = DEFAULT_MONGODB_URI)]
    uri: String,

    /// Server selection timeout in seconds
    #[arg(long, default_value_t = 30)]
    connect_timeout: u64,

    /// Log filter for stderr (e.g. "debug")
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> ReplicaProbeConfig {
        ReplicaProbeConfig {
            uri: self.uri,
            user: self.user,
            password: self.password,
            connect_timeout_secs: self.connect_timeout,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = cli.into_config();
    tracing::debug!(uri = %config.uri, user = %config.user, "Configuration loaded");

    PluginOutput::from_result(runner::check_mongodb(&config).await).print_and_exit()
}
