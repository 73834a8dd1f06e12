//! Keyboard and mouse translation into app actions.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the program.
    Quit,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move list order.
    ToggleOrder,
    /// Place a mark at a cell directly.
    Place(Position),
    /// Activate the focused item (place at cursor or jump to selection).
    Activate,
    /// Arrow key movement.
    Navigate(KeyCode),
}

/// Maps a key event to an action; releases and unknown keys map to `None`.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyAction::SwitchFocus),
        KeyCode::Char('s') => Some(KeyAction::ToggleOrder),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(KeyAction::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(KeyAction::Navigate(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Up => (row.saturating_sub(1), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves a list selection up or down within `len` entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_cursor_stays_on_board() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digit_keys_place() {
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(KeyAction::Place(Position::Center)));
        let key = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        assert_eq!(key_action(key), None);
    }

    #[test]
    fn test_selection_clamps() {
        assert_eq!(move_selection(0, 3, KeyCode::Up), 0);
        assert_eq!(move_selection(2, 3, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 3, KeyCode::Down), 2);
    }
}
