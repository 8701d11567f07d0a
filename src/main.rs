use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use atlasdeck::config::Config;
use atlasdeck::gateway::GatewayClient;
use atlasdeck::{logging, ui};

/// Terminal client for browsing a country directory service.
#[derive(Debug, Parser)]
#[command(name = "atlasdeck", version, about)]
struct Cli {
    /// Gateway base address, overriding ATLAS_API_URL and the config file.
    #[arg(long)]
    api_url: Option<String>,

    /// Alternative config file path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config =
        Config::resolve(cli.api_url, cli.config).context("failed to load configuration")?;
    tracing::info!(base_url = %config.gateway.base_url, "resolved gateway address");

    let client = GatewayClient::new(&config.gateway.base_url)
        .context("failed to build gateway client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::run(client, &runtime)?;
    Ok(())
}
