//! Ledgerview main entry point

use anyhow::Context;
use clap::Parser;
use ledgerview_api::start_server;
use ledgerview_config::Config;
use ledgerview_core::ReportClient;
use ledgerview_engine::ProcessEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "ledgerview")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web interface for browsing ledger engine reports", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = Config::load(args.config.clone())
            .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;

        eprintln!(
            "[INFO] Config loaded: engine={}, journal dir={}",
            config.engine.command,
            config.journal.directory.display()
        );

        match config.default_journal_path() {
            Some(path) if path.exists() => {
                eprintln!("[INFO] Default journal file: {}", path.display());
            }
            Some(path) => {
                eprintln!("[WARN] Default journal file not found: {}", path.display());
            }
            None => {
                eprintln!("[INFO] No default journal configured; requests must name a file");
            }
        }

        let engine = Arc::new(ProcessEngine::new(
            config.engine.command.clone(),
            config.engine.args.clone(),
        ));
        let client = ReportClient::new(engine);

        start_server(config, client)
            .await
            .context("Server error")?;

        Ok(())
    })
}
