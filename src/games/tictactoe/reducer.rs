//! Pure reducer from commands to history snapshots.

use super::action::Command;
use super::history::History;
use tracing::{debug, instrument};

/// Applies `command` to a copy of `history` and returns the copy.
///
/// Rejected commands yield an unchanged copy; the rejection is only logged.
#[instrument(skip(history), fields(current = history.current_move(), len = history.len()))]
pub fn reduce(history: &History, command: Command) -> History {
    let mut next = history.clone();
    if let Err(e) = next.dispatch(command) {
        debug!(%command, error = %e, "Command ignored");
        return history.clone();
    }
    next
}

/// Folds a sequence of commands over a fresh history.
pub fn replay<I>(history: History, commands: I) -> History
where
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .fold(history, |state, command| reduce(&state, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_reduce_does_not_touch_input() {
        let start = History::new();
        let next = reduce(&start, Command::ApplyMove(Position::Center));
        assert_eq!(start.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_rejected_command_returns_equal_state() {
        let start = reduce(&History::new(), Command::ApplyMove(Position::Center));
        let next = reduce(&start, Command::ApplyMove(Position::Center));
        assert_eq!(next, start);
        let next = reduce(&start, Command::JumpTo(7));
        assert_eq!(next, start);
    }

    #[test]
    fn test_replay_folds_commands() {
        let history = replay(
            History::new(),
            [
                Command::ApplyMove(Position::TopLeft),
                Command::ApplyMove(Position::Center),
                Command::JumpTo(1),
                Command::ToggleOrder,
            ],
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.moves()[0].index, 2);
    }
}
