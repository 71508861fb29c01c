//! Service entry point: CLI parsing, configuration, startup.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use calsum::config::loader::{load_or_default, ConfigError};
use calsum::config::validation::validate_config;
use calsum::config::ServerConfig;
use calsum::http::HttpServer;
use calsum::lifecycle::{signals, Shutdown};
use calsum::observability::{logging, metrics};

/// Streaming list-sum HTTP service.
#[derive(Parser)]
#[command(name = "calsum", about = "Sums a streamed JSON list of integers over HTTP", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8000.
    #[arg(long)]
    bind_address: Option<String>,

    /// Maximum concurrent parse tasks (0 = runtime default).
    #[arg(long)]
    worker_threads: Option<usize>,

    /// Log filter, e.g. info or calsum=debug.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(self, config: &mut ServerConfig) {
        if let Some(bind_address) = self.bind_address {
            config.listener.bind_address = bind_address;
        }
        if let Some(worker_threads) = self.worker_threads {
            config.workers.worker_threads = worker_threads;
        }
        if let Some(log_level) = self.log_level {
            config.observability.log_level = log_level;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        worker_threads = config.workers.worker_threads,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(error) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %error,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
