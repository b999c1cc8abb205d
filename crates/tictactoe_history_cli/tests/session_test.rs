//! Tests for the interactive session.

use std::io::Cursor;
use tictactoe_history_cli::{CliConfig, Flow, Session};

fn text(flow: Flow) -> String {
    match flow {
        Flow::Continue(text) => text,
        Flow::Quit => panic!("Unexpected quit"),
    }
}

#[test]
fn test_moves_and_status() {
    let mut session = Session::new(CliConfig::default());

    let out = text(session.handle_line("move 0"));
    assert!(out.ends_with("Next player: O"), "{}", out);

    for cell in ["3", "1", "4", "2"] {
        session.handle_line(cell);
    }
    assert_eq!(text(session.handle_line("status")), "Winner: X");
    assert_eq!(session.game().snapshot_count(), 6);
}

#[test]
fn test_illegal_move_is_reported_not_applied() {
    let mut session = Session::new(CliConfig::default());
    session.handle_line("center");

    let out = text(session.handle_line("move 4"));
    assert!(out.starts_with("Error: "), "{}", out);
    assert!(out.contains("already occupied"), "{}", out);

    let out = text(session.handle_line("move 9"));
    assert!(out.contains("out of bounds"), "{}", out);
    assert_eq!(session.game().current_move(), 1);
}

#[test]
fn test_jump_and_overwrite_future() {
    let mut session = Session::new(CliConfig::default());
    for cell in ["0", "1", "2", "3"] {
        session.handle_line(cell);
    }

    let out = text(session.handle_line("jump 1"));
    assert!(out.ends_with("Next player: O"), "{}", out);

    let moves = text(session.handle_line("moves"));
    assert_eq!(moves.lines().count(), 5);
    assert!(moves.contains("* Go to move #1 (Top-left)"), "{}", moves);

    session.handle_line("8");
    assert_eq!(session.game().snapshot_count(), 3);

    let out = text(session.handle_line("jump 7"));
    assert!(out.contains("out of range"), "{}", out);
}

#[test]
fn test_new_game_resets() {
    let mut session = Session::new(CliConfig::default());
    session.handle_line("4");
    let out = text(session.handle_line("new"));
    assert!(out.starts_with("New game"), "{}", out);
    assert_eq!(session.game().snapshot_count(), 1);
    assert_eq!(session.game().current_move(), 0);
}

#[test]
fn test_quit() {
    let mut session = Session::new(CliConfig::default());
    assert_eq!(session.handle_line("quit"), Flow::Quit);
}

#[test]
fn test_run_reads_until_quit() {
    let mut session = Session::new(CliConfig::default());
    let input = Cursor::new("0\n\nbogus\n4\nquit\n8\n");
    let mut output = Vec::new();

    session.run(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Unknown command: bogus"), "{}", output);
    assert_eq!(session.game().snapshot_count(), 3);
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut session = Session::new(CliConfig::default());
    let mut output = Vec::new();

    session.run(Cursor::new("4\n0"), &mut output).unwrap();

    assert_eq!(session.game().snapshot_count(), 3);
}
