//! First-class commands for the history store.
//!
//! UI events are translated into commands instead of mutating state
//! directly. Each command is applied as a single run-to-completion step.

use super::Position;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A user intent against the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Command {
    /// Place the next player's mark at a position on the current board.
    #[display("apply move at {}", _0)]
    ApplyMove(Position),
    /// Make snapshot `n` the current board.
    #[display("jump to move #{}", _0)]
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    #[display("toggle order")]
    ToggleOrder,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square (must be 0-8).
    #[display("Square index {} is out of bounds (must be 0-8)", _0)]
    InvalidSquare(#[error(not(source))] usize),
}

/// Error returned when navigating outside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move #{} does not exist (history has {} entries)", requested, len)]
pub struct JumpError {
    /// Requested move index.
    pub requested: usize,
    /// Number of snapshots in the history.
    pub len: usize,
}

/// Error from dispatching a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum CommandError {
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// A jump was rejected.
    #[display("{}", _0)]
    Jump(JumpError),
}
