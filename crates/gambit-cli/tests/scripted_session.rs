//! Scripted sessions over in-memory input and output.

use std::io::Cursor;

use gambit_core::{Board, Color};
use gambit_cli::{Session, SessionConfig};
use gambit_game::{Game, GameStatus};

fn play(game: Game, script: &str) -> (GameStatus, String) {
    let config = SessionConfig {
        render_board: false,
        show_move_count: false,
    };
    let mut session = Session::new(game, Cursor::new(script.to_string()), Vec::new(), config);
    let status = session.run().expect("session should not fail on in-memory IO");
    (status, String::from_utf8(session.into_output()).unwrap())
}

#[test]
fn fools_mate_transcript() {
    let script = "f2 f3\ne7-e5\nG2,G4\nd8, h4\n";
    let (status, out) = play(Game::new(), script);

    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(out.contains("Black won with check mate!"), "{out}");
    assert_eq!(out.matches("White's move: ").count(), 2);
    assert_eq!(out.matches("Black's move: ").count(), 2);
}

#[test]
fn illegal_moves_are_explained() {
    let script = "e7 e5\ne2 e5\ne4 e5\na1 a1\nb1 b3\nz9 e4\nquit\n";
    let (status, out) = play(Game::new(), script);

    assert_eq!(status, GameStatus::InProgress);
    assert!(out.contains("Illegal move: that's not your piece"));
    assert!(out.contains("Illegal move: a pawn cannot move that way"));
    assert!(out.contains("Illegal move: no piece at source position"));
    assert!(out.contains("Illegal move: source and destination are the same"));
    assert!(out.contains("Illegal move: a knight cannot move that way"));
    assert!(out.contains("Illegal move: invalid square"));
    assert_eq!(out.matches("White's move: ").count(), 7);
}

#[test]
fn check_is_announced() {
    let script = "e2 e4\nf7 f6\nd1 h5\n";
    let (_, out) = play(Game::new(), script);
    assert!(out.contains("Black is in check!"));
}

#[test]
fn capture_is_announced() {
    let script = "e2 e4\nd7 d5\ne4 d5\n";
    let (_, out) = play(Game::new(), script);
    assert!(out.contains("White captured black's pawn!"));
}

#[test]
fn king_capture_ends_session() {
    let board: Board = "4k3/8/8/8/8/8/8/4RK2".parse().unwrap();
    let (status, out) = play(Game::from_board(board, Color::White), "e1 e8\nf1 f2\n");

    assert_eq!(
        status,
        GameStatus::KingCaptured {
            winner: Color::White
        }
    );
    assert!(out.contains("White wins! Black king has been captured!"));
    assert!(!out.contains("captured black's king"));
    assert_eq!(out.matches("'s move: ").count(), 1);
}

#[test]
fn stalemate_is_announced() {
    let board: Board = "7k/8/4Q3/6K1/8/8/8/8".parse().unwrap();
    let (status, out) = play(Game::from_board(board, Color::White), "e6 f7\n");
    assert_eq!(status, GameStatus::Stalemate);
    assert!(out.contains("Black has no legal moves, game ends in a draw!"));
}

#[test]
fn promotion_is_announced() {
    let board: Board = "7k/P7/8/8/8/8/8/K7".parse().unwrap();
    let (_, out) = play(Game::from_board(board, Color::White), "a7 a8\n");
    assert!(out.contains("White's pawn was promoted to a queen!"));
}

#[test]
fn board_is_drawn_by_default() {
    let mut session = Session::new(
        Game::new(),
        Cursor::new("board\n"),
        Vec::new(),
        SessionConfig::default(),
    );
    session.run().unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(out.matches("    A   B   C   D   E   F   G   H").count(), 4);
    assert!(out.contains("8 | r | n | b | q | k | b | n | r |"));
}

#[test]
fn non_utf8_line_is_rejected_and_play_continues() {
    let mut script = b"\xff\xfe e2\n".to_vec();
    script.extend_from_slice(b"e2 e4\n");
    let config = SessionConfig {
        render_board: false,
        show_move_count: true,
    };
    let mut session = Session::new(Game::new(), Cursor::new(script), Vec::new(), config);

    let status = session.run().expect("bad bytes must not end the session");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(session.game().history().len(), 1);

    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Illegal move: invalid square"), "{out}");
    assert!(out.contains("Moves played: 1"));
    assert_eq!(out.matches("White's move: ").count(), 2);
}
