//! Application state and logic.

use crate::config::AppConfig;
use crate::games::tictactoe::{Command, GameView, History, Position, reduce};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument};

use super::input::{Focus, KeyAction, key_action, move_cursor, move_selection};

/// Screen regions recorded during the last draw, used for mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Board cells and the position each one shows.
    pub cells: Vec<(Rect, Position)>,
    /// Inner area of the move list (one row per entry).
    pub moves: Rect,
    /// The sort order button.
    pub toggle: Rect,
}

/// Main application state.
pub struct App {
    history: History,
    cursor: Position,
    focus: Focus,
    moves_state: ListState,
    hit_map: HitMap,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let mut app = Self {
            history: History::with_order(config.sort_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            moves_state: ListState::default(),
            hit_map: HitMap::default(),
            show_hints: config.show_hints(),
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// The game history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(&self.history)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether empty cells show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list widget state.
    pub fn moves_state_mut(&mut self) -> &mut ListState {
        &mut self.moves_state
    }

    /// Hit regions from the last draw.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Replaces the hit regions after a draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Reduces `command` into a new history snapshot.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        self.history = reduce(&self.history, command);
        self.sync_selection();
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = key_action(key) else {
            return;
        };
        debug!(?action, focus = ?self.focus, "Key action");

        match action {
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyAction::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyAction::ToggleOrder => self.dispatch(Command::ToggleOrder),
            KeyAction::Place(pos) => {
                self.cursor = pos;
                self.dispatch(Command::ApplyMove(pos));
            }
            KeyAction::Activate => match self.focus {
                Focus::Board => self.dispatch(Command::ApplyMove(self.cursor)),
                Focus::Moves => {
                    if let Some(index) = self.selected_move() {
                        self.dispatch(Command::JumpTo(index));
                    }
                }
            },
            KeyAction::Navigate(code) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Moves => {
                    let selected = self.moves_state.selected().unwrap_or(0);
                    let next = move_selection(selected, self.history.len(), code);
                    self.moves_state.select(Some(next));
                }
            },
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let point = ScreenPosition::new(mouse.column, mouse.row);

        if let Some(&(_, pos)) = self
            .hit_map
            .cells
            .iter()
            .find(|(area, _)| area.contains(point))
        {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.dispatch(Command::ApplyMove(pos));
        } else if self.hit_map.toggle.contains(point) {
            self.dispatch(Command::ToggleOrder);
        } else if self.hit_map.moves.contains(point) {
            let row = usize::from(mouse.row - self.hit_map.moves.y);
            let display_index = self.moves_state.offset() + row;
            if let Some(entry) = self.history.moves().get(display_index) {
                self.focus = Focus::Moves;
                self.dispatch(Command::JumpTo(entry.index));
            }
        }
    }

    /// Snapshot index of the selected move list entry.
    fn selected_move(&self) -> Option<usize> {
        let selected = self.moves_state.selected()?;
        self.history.moves().get(selected).map(|entry| entry.index)
    }

    /// Points the list selection at the current snapshot.
    fn sync_selection(&mut self) {
        let current = self.history.moves().iter().position(|e| e.is_current);
        self.moves_state.select(current);
    }
}
