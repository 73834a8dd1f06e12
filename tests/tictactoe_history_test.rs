//! Tests for the snapshot history and time travel.

use strictly_timetravel::{
    Command, Evaluation, GameView, History, MoveError, Player, Position, SortOrder, reduce,
};

fn play(indices: &[usize]) -> History {
    let mut history = History::new();
    for &index in indices {
        history.apply_move_at(index).expect("legal move");
    }
    history
}

#[test]
fn test_occupied_square_is_noop() {
    let mut history = play(&[0, 4]);
    let before = history.clone();
    assert!(matches!(
        history.apply_move(Position::TopLeft),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    ));
    assert_eq!(history, before);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut history = play(&[0, 4, 1, 3, 2]);
    let before = history.clone();
    assert_eq!(history.apply_move(Position::BottomLeft), Err(MoveError::GameOver));
    assert_eq!(history, before);
}

#[test]
fn test_move_on_draw_board_is_rejected() {
    // X O X / X O O / O X X
    let mut history = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(history.evaluation(), Evaluation::Draw);
    assert!(history.apply_move(Position::Center).is_err());
    assert_eq!(history.len(), 10);
}

#[test]
fn test_move_after_jump_truncates_later_snapshots() {
    let mut history = play(&[0, 4, 8, 2]);
    assert_eq!(history.len(), 5);

    history.jump_to(2).unwrap();
    assert_eq!(history.len(), 5);

    history.apply_move(Position::BottomLeft).unwrap();
    // Snapshots 0..=2 survive, the new board is appended.
    assert_eq!(history.len(), 4);
    assert_eq!(history.move_count(), 3);
    assert_eq!(history.current_move(), 3);
    // Snapshot 2 had two marks, so X moved.
    assert_eq!(
        history.current_board().get(Position::BottomLeft).player(),
        Some(Player::X)
    );
    assert!(history.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_jump_to_start_and_back() {
    let mut history = play(&[0, 4]);
    history.jump_to(0).unwrap();
    assert_eq!(history.next_player(), Player::X);
    assert_eq!(history.current_board().occupied_count(), 0);
    history.jump_to(2).unwrap();
    assert_eq!(history.current_board().occupied_count(), 2);
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut history = play(&[0]);
    let err = history.jump_to(2).unwrap_err();
    assert_eq!(err.requested, 2);
    assert_eq!(err.len, 2);
    assert_eq!(history.current_move(), 1);
}

#[test]
fn test_toggle_twice_restores_order() {
    let mut history = play(&[0, 4, 1]);
    history.jump_to(1).unwrap();
    let before = history.clone();
    let original = history.moves();

    history.toggle_order();
    assert_eq!(history.order(), SortOrder::Descending);
    assert_eq!(history.snapshots(), before.snapshots());
    assert_eq!(history.current_move(), 1);
    let mut reversed = history.moves();
    reversed.reverse();
    assert_eq!(reversed, original);

    history.toggle_order();
    assert_eq!(history.moves(), original);
    assert_eq!(history, before);
}

#[test]
fn test_scenario_first_row_win_then_noop() {
    let mut history = History::new();
    for index in [0, 4, 1, 3, 2] {
        history = reduce(&history, Command::ApplyMove(Position::from_index(index).unwrap()));
    }
    match history.evaluation() {
        Evaluation::Winner { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected winner, got {:?}", other),
    }

    let after_win = history.clone();
    for index in [5, 6] {
        history = reduce(&history, Command::ApplyMove(Position::from_index(index).unwrap()));
    }
    assert_eq!(history, after_win);
}

#[test]
fn test_view_tracks_jumps() {
    let mut history = play(&[0, 4, 1, 3, 2]);
    assert_eq!(GameView::from(&history).status(), "Winner: X");

    history = reduce(&history, Command::JumpTo(4));
    let view = GameView::from(&history);
    assert_eq!(view.status(), "Next player: X");
    assert_eq!(view.winning_line(), None);
    assert_eq!(*view.current_move(), 4);
    assert!(view.moves()[4].is_current);

    history = reduce(&history, Command::ToggleOrder);
    let view = GameView::from(&history);
    assert_eq!(view.toggle_label(), "Sort Ascending");
    assert_eq!(view.moves()[0].label, "Go to move #5");
}
