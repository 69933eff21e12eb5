use anyhow::Context;
use clap::Parser;

use rentdesk::cli::{self, Cli};
use rentdesk::config::Config;
use rentdesk::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    cli::run(cli, config).await?;
    Ok(())
}
