//! Read-only snapshot of a history for renderers.

use super::history::{History, MoveEntry, SortOrder};
use super::rules::{Evaluation, WinningLine};
use super::{Board, Position};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board on display.
    board: Board,
    /// Evaluation of that board.
    evaluation: Evaluation,
    /// Status line ("Winner: X", "Draw", "Next player: O").
    status: String,
    /// Index of the snapshot on display.
    current_move: usize,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Current move list order.
    order: SortOrder,
    /// Label for the order toggle button.
    #[getter(skip)]
    toggle_label: &'static str,
}

impl GameView {
    /// Label for the order toggle button.
    pub fn toggle_label(&self) -> &'static str {
        self.toggle_label
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.evaluation.winning_line()
    }

    /// True if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }

    /// Plain text rendering: board, status and move list.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status);
        if let Some(line) = self.winning_line() {
            out.push_str(&format!(" {}", line));
        }
        out.push_str(&format!("\n\n[{}]\n", self.toggle_label));
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, entry.index, entry.label));
        }
        out
    }
}

impl From<&History> for GameView {
    fn from(history: &History) -> Self {
        let evaluation = history.evaluation();
        Self {
            board: *history.current_board(),
            status: evaluation.status(),
            evaluation,
            current_move: history.current_move(),
            moves: history.moves(),
            order: history.order(),
            toggle_label: history.order().toggle_label(),
        }
    }
}
