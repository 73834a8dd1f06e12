//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the history store and the renderers can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, WinningLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// A player holds a complete line.
    Winner {
        /// The winning player.
        player: Player,
        /// The line they completed.
        line: WinningLine,
    },
    /// Board is full and nobody won.
    Draw,
    /// Game continues with `next` to move.
    InProgress {
        /// Player due to move.
        next: Player,
    },
}

impl Evaluation {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Evaluation::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Evaluation::InProgress { .. })
    }

    /// Status line shown to players.
    pub fn status(&self) -> String {
        match self {
            Evaluation::Winner { player, .. } => format!("Winner: {}", player),
            Evaluation::Draw => "Draw".to_string(),
            Evaluation::InProgress { next } => format!("Next player: {}", next),
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status())
    }
}

/// Player due to move on `board`, by parity of occupied squares.
pub fn next_player(board: &Board) -> Player {
    Player::for_move_count(board.occupied_count())
}

/// Evaluates the board: winner, draw, or the player to move next.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(Win { player, line }) = check_winner(board) {
        Evaluation::Winner { player, line }
    } else if is_full(board) {
        Evaluation::Draw
    } else {
        Evaluation::InProgress {
            next: next_player(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(
            evaluate(&Board::new()),
            Evaluation::InProgress { next: Player::X }
        );
    }

    #[test]
    fn test_evaluate_odd_count_gives_o() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(evaluate(&board), Evaluation::InProgress { next: Player::O });
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOXXOXOXO".parse().unwrap();
        assert_eq!(evaluate(&board), Evaluation::Draw);
        assert!(evaluate(&board).is_over());
        assert_eq!(evaluate(&board).status(), "Draw");
    }

    #[test]
    fn test_evaluate_winner() {
        let board: Board = "XXX.OO...".parse().unwrap();
        let eval = evaluate(&board);
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(eval.status(), "Winner: X");
    }

    #[test]
    fn test_status_in_progress() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(evaluate(&board).status(), "Next player: X");
    }
}
