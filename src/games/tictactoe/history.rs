//! Snapshot history with time-travel navigation.
//!
//! The store keeps every board since the start of the game plus the index
//! of the board currently shown. Moves are made against the current board;
//! making a move after jumping back discards the later snapshots.

use super::action::{Command, CommandError, JumpError, MoveError};
use super::rules::{self, Evaluation};
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// Snapshot index the entry jumps to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// True if this snapshot is the one on display.
    pub is_current: bool,
}

/// Label for the move list entry of snapshot `index`.
pub fn move_label(index: usize) -> String {
    if index > 0 {
        format!("Go to move #{}", index)
    } else {
        "Go to game start".to_string()
    }
}

/// Ordered board snapshots and the index of the one on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    /// Never empty; snapshot 0 is the empty board.
    snapshots: Vec<Board>,
    current: usize,
    order: SortOrder,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a history with the given move list order.
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
            order,
        }
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of moves recorded (snapshots after the start).
    pub fn move_count(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The board on display.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Player due to move on the current board; X on even indices.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.current)
    }

    /// Evaluates the current board.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current_board())
    }

    /// Move list presentation order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Places the next player's mark at `pos` on the current board.
    ///
    /// Later snapshots are discarded before the new board is appended.
    /// Rejected moves leave the history untouched.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if rules::check_winner(&board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = board.with(pos, self.next_player());
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug_assert!(self.is_consistent());

        debug!(position = %pos, current = self.current, "Move applied");
        Ok(())
    }

    /// Like [`History::apply_move`] but addressed by board index (0-8).
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidSquare(index))?;
        self.apply_move(pos)
    }

    /// Shows snapshot `move_index` without changing the history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.snapshots.len() {
            return Err(JumpError {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.current = move_index;
        debug!(current = self.current, "Jumped");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Order toggled");
    }

    /// Applies a command in place.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::ApplyMove(pos) => self.apply_move(pos)?,
            Command::JumpTo(move_index) => self.jump_to(move_index)?,
            Command::ToggleOrder => self.toggle_order(),
        }
        Ok(())
    }

    /// Checks the snapshot chain: snapshot 0 is empty and each later
    /// snapshot adds exactly one mark, by the player whose turn it was,
    /// without clearing any earlier one.
    pub fn is_consistent(&self) -> bool {
        let starts_empty = self.snapshots.first() == Some(&Board::new());
        let in_range = self.current < self.snapshots.len();
        starts_empty
            && in_range
            && self.snapshots.windows(2).enumerate().all(|(k, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let added: Vec<_> = Position::ALL
                    .iter()
                    .filter(|pos| before.get(**pos) != after.get(**pos))
                    .collect();
                match added.as_slice() {
                    [pos] => {
                        before.is_empty(**pos)
                            && after.get(**pos).player() == Some(Player::for_move_count(k))
                    }
                    _ => false,
                }
            })
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.snapshots.len())
            .map(|index| MoveEntry::new(index, move_label(index), index == self.current))
            .collect();
        if self.order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

/// Deserialized history that broke the snapshot chain.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Inconsistent history: {} snapshots, current {}", snapshots, current)]
pub struct HistoryError {
    /// Number of snapshots read.
    pub snapshots: usize,
    /// Current index read.
    pub current: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    current: usize,
    #[serde(default)]
    order: SortOrder,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: record.snapshots,
            current: record.current,
            order: record.order,
        };
        if history.is_consistent() {
            Ok(history)
        } else {
            Err(HistoryError {
                snapshots: history.snapshots.len(),
                current: history.current,
            })
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
