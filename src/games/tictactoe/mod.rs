//! Tic-tac-toe with snapshot history and time-travel navigation.

pub mod action;
pub mod history;
pub mod position;
pub mod reducer;
pub mod rules;
pub mod types;
pub mod view;

pub use action::{Command, CommandError, JumpError, MoveError};
pub use history::{History, HistoryError, MoveEntry, SortOrder, move_label};
pub use position::Position;
pub use reducer::{reduce, replay};
pub use rules::{Evaluation, Win, WinningLine, check_winner, evaluate, is_draw, is_full, next_player};
pub use types::{Board, BoardParseError, Player, Square};
pub use view::GameView;

/// Alias for clarity: a mark is the symbol a player places.
pub type Mark = Player;
