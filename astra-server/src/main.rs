//! Server entry point for the AstraAI gateway

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use astra_core::config::ConfigLoader;
use astra_core::logging::init_logging;
use astra_core::session::SessionManager;
use astra_providers::GeminiClient;
use astra_server::{run_server, AppState, ChatService};

#[derive(Parser)]
#[command(name = "astra-server")]
#[command(about = "AstraAI chat gateway")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration directory
    #[arg(short, long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    let _guard = init_logging(&config.logging);

    if config.provider.api_key.trim().is_empty() {
        tracing::warn!("no API key configured; chat turns will fail until one is set");
    }

    let sessions = Arc::new(SessionManager::new(config.chat.max_history));
    let client = GeminiClient::new(&config.provider);
    let chat = ChatService::new(sessions, client, &config.chat);
    let state = AppState::new(chat);

    let port = cli.port.unwrap_or(config.server.port);
    info!(model = %config.provider.model, port, "starting gateway");

    run_server(state, port).await
}
