//! Paydash main entry point

use clap::Parser;
use paydash_api::start_server;
use paydash_config::Config;
use paydash_core::{Dashboard, JsonFileSource};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "paydash")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight payment transactions dashboard backend", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.clone())?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    log::info!(
        "config loaded: transactions file={}",
        config.transactions_path().display()
    );

    let rt = Runtime::new()?;
    rt.block_on(async {
        let source = Arc::new(JsonFileSource::new(config.transactions_path()));
        let dashboard = Arc::new(Dashboard::new(config.clone(), source));

        // Missing data at boot is not fatal; /api/reload can pick it up later
        match dashboard.load().await {
            Ok(_) => log::info!("transactions loaded"),
            Err(e) => log::warn!("could not load transactions yet: {}", e),
        }

        start_server(config, dashboard).await
    })
}
