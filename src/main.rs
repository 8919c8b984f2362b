use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod models;
mod crypto;
mod generators;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Serve { port: None, address: None }) {
        CliCommand::Serve { port, address } => {
            if let Some(port) = port {
                config.web_port = port;
            }
            if let Some(address) = address {
                config.web_address = address;
            }

            println!("🚀 API server starting on http://{}:{}", config.web_address, config.web_port);
            api::start_server(&config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("API server shut down gracefully");
        }
        CliCommand::Generate(options) => {
            if let Err(e) = cli::handlers::handle_generate(&config, &options) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
        CliCommand::Interactive => {
            tokio::task::spawn_blocking(move || cli::menu::run_interactive(&config))
                .await
                .context("Interactive session panicked")??;
        }
    }

    Ok(())
}
