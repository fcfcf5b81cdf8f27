//! Strictly Hangman - Unified CLI
//!
//! Hangman game server with an interactive terminal mode.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_hangman::{GameRegistry, ServerConfig, console, server};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { port, host, config } => run_http_server(host, port, config).await,
        Command::Play => run_console(),
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_http_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(host, port);

    info!(host = %config.host(), port = config.port(), "Starting Strictly Hangman HTTP server");

    let registry = GameRegistry::new();
    server::serve(config, registry).await
}

/// Play one game on stdin/stdout
fn run_console() -> Result<()> {
    // Logs go to stderr and stay quiet unless asked for
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = GameRegistry::new();
    let stdin = std::io::stdin();
    let status = console::play(&registry, stdin.lock(), std::io::stdout())?;

    info!(%status, "Game over");
    Ok(())
}
