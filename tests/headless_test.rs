//! Tests for the headless replay and evaluate commands.

use serde_json::Value;
use strictly_timetravel::SortOrder;
use strictly_timetravel::headless::{run_evaluate, run_replay};

#[test]
fn test_replay_skips_squares_outside_board() {
    let with_junk = run_replay(&["0", "9", "4", "42", "1"], None, SortOrder::Ascending, false)
        .expect("replay succeeds");
    let clean = run_replay(&["0", "4", "1"], None, SortOrder::Ascending, false)
        .expect("replay succeeds");
    assert_eq!(with_junk, clean);
    assert!(clean.contains("Next player: O"));
    assert!(clean.contains("> 3. Go to move #3"));
}

#[test]
fn test_replay_accepts_labels() {
    let by_label = run_replay(
        &["top-left", "Center", "top-center"],
        None,
        SortOrder::Ascending,
        false,
    )
    .expect("replay succeeds");
    let by_index =
        run_replay(&["0", "4", "1"], None, SortOrder::Ascending, false).expect("replay succeeds");
    assert_eq!(by_label, by_index);
}

#[test]
fn test_replay_jump_out_of_range_is_error() {
    let err = run_replay(&["0", "4"], Some(3), SortOrder::Ascending, false)
        .expect_err("jump past the end fails");
    assert!(err.to_string().contains("Cannot jump to move #3"));
}

#[test]
fn test_replay_jump_shows_earlier_board() {
    let out = run_replay(&["0", "4", "1"], Some(1), SortOrder::Descending, false)
        .expect("replay succeeds");
    assert!(out.contains("Next player: O"));
    assert!(out.contains("> 1. Go to move #1"));
    assert!(out.contains("[Sort Ascending]"));
    // Later snapshots stay listed after a jump.
    assert!(out.contains("  3. Go to move #3"));
}

#[test]
fn test_replay_json_describes_view() {
    let out = run_replay(&["0", "4", "1", "3", "2", "5"], None, SortOrder::Ascending, true)
        .expect("replay succeeds");
    let view: Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(view["status"], "Winner: X");
    // The move after the win was ignored.
    assert_eq!(view["current_move"], 5);
    assert_eq!(view["moves"].as_array().map(Vec::len), Some(6));
    assert_eq!(view["toggle_label"], "Sort Descending");
}

#[test]
fn test_evaluate_invalid_board_is_error() {
    let err = run_evaluate("XXZ......", false).expect_err("bad cell fails");
    assert!(err.to_string().contains("Invalid board"));
    assert!(run_evaluate("XO", false).is_err());
}

#[test]
fn test_evaluate_text_draw() {
    let out = run_evaluate("XOXXOXOXO", false).expect("valid board");
    assert!(out.ends_with("\n\nDraw\n"));
}

#[test]
fn test_evaluate_json() {
    let out = run_evaluate("..O.O.O..", true).expect("valid board");
    let evaluation: Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(evaluation["Winner"]["player"], "O");

    let out = run_evaluate("X........", true).expect("valid board");
    let evaluation: Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(evaluation["InProgress"]["next"], "O");
}
