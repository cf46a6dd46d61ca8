use std::path::PathBuf;

use clap::Parser;

use index_tracker::config::{resolve_config, Overrides, TrackerConfig};
use index_tracker::lifecycle::{signals, startup, Shutdown};
use index_tracker::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "index-tracker", version)]
#[command(about = "Serves timestamped index patches from a directory over HTTP", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Patch directory (overrides PATCH_DIR)
    #[arg(long)]
    patch_dir: Option<PathBuf>,

    /// Listening port (overrides API_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&TrackerConfig::default().observability.log_filter);
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    init_logging(&config.observability.log_filter);
    tracing::info!("index-tracker v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    if let Err(e) = startup::run(config, &shutdown).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn load(cli: &Cli) -> Result<TrackerConfig, Box<dyn std::error::Error>> {
    let mut overrides = Overrides::from_env()?;
    if let Some(dir) = &cli.patch_dir {
        overrides.patch_dir = Some(dir.clone());
    }
    if let Some(port) = cli.port {
        overrides.port = Some(port);
    }

    Ok(resolve_config(cli.config.as_deref(), overrides)?)
}
