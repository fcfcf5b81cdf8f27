//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};

/// Strictly Hangman - phrase guessing game server
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Hangman game over HTTP or in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Http {
        /// Port to bind to (overrides the config file, default 3001)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file, default 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML server config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play a single game in the terminal
    Play,
}
