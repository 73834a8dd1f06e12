//! Headless replay and evaluation for the `replay` and `evaluate` commands.
//!
//! Both functions return the text to print so callers decide where it goes.

use crate::games::tictactoe::{
    Board, Command, GameView, History, Position, SortOrder, evaluate, replay,
};
use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

/// Parses move entries given as board indices (0-8) or position labels.
///
/// Entries that name no square are skipped with a warning.
#[instrument(skip(entries), fields(count = entries.len()))]
pub fn parse_moves<S: AsRef<str>>(entries: &[S]) -> Vec<Position> {
    entries
        .iter()
        .filter_map(|entry| {
            let entry: &str = entry.as_ref();
            let pos = Position::from_label_or_number(entry);
            if pos.is_none() {
                warn!(entry, "Skipping square outside the board");
            }
            pos
        })
        .collect()
}

/// Replays `moves` through the reducer, optionally jumps, and renders the view.
///
/// Rejected moves are skipped; an out-of-range jump is an error.
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn run_replay<S: AsRef<str>>(
    moves: &[S],
    jump: Option<usize>,
    order: SortOrder,
    json: bool,
) -> Result<String> {
    let commands = parse_moves(moves).into_iter().map(Command::ApplyMove);
    let mut history = replay(History::with_order(order), commands);

    if let Some(move_index) = jump {
        history
            .jump_to(move_index)
            .with_context(|| format!("Cannot jump to move #{}", move_index))?;
    }
    info!(
        snapshots = history.len(),
        current = history.current_move(),
        "Replay finished"
    );

    let view = GameView::from(&history);
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(view.to_text())
    }
}

/// Parses a board string and renders its evaluation.
#[instrument]
pub fn run_evaluate(board: &str, json: bool) -> Result<String> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let evaluation = evaluate(&parsed);

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&evaluation)?));
    }
    let verdict = match evaluation.winning_line() {
        Some(line) => format!("{} {}", evaluation, line),
        None => evaluation.to_string(),
    };
    Ok(format!("{}\n\n{}\n", parsed.display(), verdict))
}
