//! Strictly Timetravel - Unified CLI
//!
//! Plays tic-tac-toe in the terminal, or replays and evaluates games headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_timetravel::{AppConfig, SortOrder, headless, tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        None => tui::run_tui(config),
        Some(Command::Play {
            descending,
            log_file,
        }) => {
            let mut config = config;
            if descending {
                config = config.with_descending(true);
            }
            if let Some(path) = log_file {
                config = config.with_log_file(path);
            }
            tui::run_tui(config)
        }
        Some(Command::Replay {
            moves,
            jump,
            descending,
            json,
        }) => {
            initialize_tracing(&config);
            let order = if descending {
                SortOrder::Descending
            } else {
                config.sort_order()
            };
            print!("{}", headless::run_replay(moves.as_slice(), jump, order, json)?);
            Ok(())
        }
        Some(Command::Evaluate { board, json }) => {
            initialize_tracing(&config);
            print!("{}", headless::run_evaluate(&board, json)?);
            Ok(())
        }
    }
}

/// Headless commands log to stderr.
fn initialize_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
