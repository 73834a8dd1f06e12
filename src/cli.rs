//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time-travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,

        /// Override the log file path
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of moves and print the result
    Replay {
        /// Squares as indices (0-8) or labels like "center", comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves in descending order
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board given as nine cells, e.g. "XXX.O.O.."
    Evaluate {
        /// Cells in row-major order: X, O, or . _ - or a digit for empty
        #[arg(short, long)]
        board: String,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_parses_comma_list() {
        let cli = Cli::parse_from(["strictly_timetravel", "replay", "--moves", "0,4,1", "--jump", "1"]);
        match cli.command {
            Some(Command::Replay { moves, jump, .. }) => {
                assert_eq!(moves, vec!["0", "4", "1"]);
                assert_eq!(jump, Some(1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_accepts_labels() {
        let cli = Cli::parse_from(["strictly_timetravel", "replay", "-m", "center,top-left"]);
        match cli.command {
            Some(Command::Replay { moves, .. }) => {
                assert_eq!(moves, vec!["center", "top-left"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["strictly_timetravel"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("strictly_timetravel.toml"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
