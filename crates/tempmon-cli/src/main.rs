//! tempmon - terminal frontend for remote temperature monitoring.
//!
//! `tempmon watch` listens for UDP temperature broadcasts and renders a
//! live device table; `tempmon send` broadcasts this machine's CPU
//! temperature so it shows up in someone else's table.

mod cli;
mod commands;
mod error;
mod output;

use std::path::Path;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};
use tempmon_core::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs on stderr so they never interleave with the rendered table.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Watch(args) => commands::run_watch(args, config, cli.json).await,
        Commands::Send(args) => commands::run_send(args, config).await,
    }
}
