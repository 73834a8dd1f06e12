//! Strictly Timetravel library - tic-tac-toe with move history
//!
//! Every move produces a new board snapshot; players can jump back to any
//! earlier snapshot and continue from there, discarding the moves after it.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board (winner and line, draw, next player)
//! - **History**: snapshot store with time-travel navigation
//! - **Reducer**: UI events as [`Command`]s reduced into new history snapshots
//! - **TUI**: ratatui front end driven by mouse and keyboard
//! - **Headless**: replay and evaluate without a terminal UI
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Command, Evaluation, History, Player, Position, reduce};
//!
//! let mut history = History::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     history = reduce(&history, Command::ApplyMove(pos));
//! }
//! assert_eq!(history.evaluation(), Evaluation::InProgress { next: Player::O });
//!
//! // Go back to the first move; the next move discards the later ones.
//! history = reduce(&history, Command::JumpTo(1));
//! history = reduce(&history, Command::ApplyMove(Position::BottomRight));
//! assert_eq!(history.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod headless;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Command, CommandError, Evaluation, GameView, History, HistoryError,
    JumpError, Mark, MoveEntry, MoveError, Player, Position, SortOrder, Square, Win, WinningLine,
    evaluate, reduce,
};
