use clap::Parser;
use std::path::PathBuf;

use storefront::config::Config;
use storefront::logging::init_tracing;
use storefront::ui::runtime;

/// Terminal client for the meetup store.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Cli {
    /// WebSocket URL of the store server (overrides the config file).
    #[arg(long)]
    server: Option<String>,

    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.server {
        config.server.url = url;
    }
    config.validate()?;

    runtime::run(config)
}
