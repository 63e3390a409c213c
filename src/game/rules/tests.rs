//! Tests for the bundled rules engine
//!
//! # Test Organization
//!
//! - `test_legal_*` - move enumeration and notation
//! - `test_play_*` - execution and rejection
//! - `test_undo_*` - taking back plies
//! - `test_end_*` - termination predicates
//! - `test_token_*` - book token resolution

use super::*;
use crate::game::error::TrainerError;
use shakmaty::{Color, Role, Square};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play_uci(board: &mut ChessBoard, uci: &str) -> MoveRecord {
    let promotion = uci.chars().nth(4).and_then(Role::from_char);
    board.play(sq(&uci[0..2]), sq(&uci[2..4]), promotion).unwrap()
}

#[test]
fn test_legal_initial_position_has_twenty_moves() {
    let board = ChessBoard::new();
    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.fen(), START_FEN);
}

#[test]
fn test_legal_moves_from_one_square() {
    let board = ChessBoard::new();
    let knight: Vec<_> = board
        .legal_moves_from(sq("g1"))
        .into_iter()
        .map(|m| m.san)
        .collect();
    assert_eq!(knight.len(), 2);
    assert!(knight.contains(&"Nf3".to_string()));
    assert!(knight.contains(&"Nh3".to_string()));
    assert!(board.legal_moves_from(sq("e4")).is_empty());
}

#[test]
fn test_legal_castling_uses_king_destination() {
    let board =
        ChessBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = board
        .legal_moves_from(sq("e1"))
        .into_iter()
        .filter(|m| m.san.starts_with("O-O"))
        .map(|m| m.uci)
        .collect();
    assert!(castles.contains(&"e1g1".to_string()));
    assert!(castles.contains(&"e1c1".to_string()));
}

#[test]
fn test_play_returns_record_with_san() {
    let mut board = ChessBoard::new();
    let record = play_uci(&mut board, "g1f3");
    assert_eq!(record.san, "Nf3");
    assert_eq!(record.uci, "g1f3");
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.piece_at(sq("f3")).map(|p| p.role), Some(Role::Knight));
}

#[test]
fn test_play_illegal_leaves_position_untouched() {
    let mut board = ChessBoard::new();
    let before = board.fen();
    let result = board.play(sq("e2"), sq("e5"), None);
    assert!(matches!(result, Err(TrainerError::IllegalMove { .. })));
    assert_eq!(board.fen(), before);
}

#[test]
fn test_play_check_decoration() {
    let mut board = ChessBoard::new();
    for uci in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"] {
        play_uci(&mut board, uci);
    }
    let mate = play_uci(&mut board, "h5f7");
    assert_eq!(mate.san, "Qxf7#");
    assert!(board.is_checkmate());
    assert!(board.is_game_over());
}

#[test]
fn test_play_promotion() {
    let mut board = ChessBoard::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let options = board.legal_moves_from(sq("e7"));
    assert_eq!(options.len(), 4);
    let record = play_uci(&mut board, "e7e8q");
    assert_eq!(record.promotion, Some(Role::Queen));
    assert!(record.san.starts_with("e8=Q"));
}

#[test]
fn test_undo_restores_previous_fen() {
    let mut board = ChessBoard::new();
    play_uci(&mut board, "e2e4");
    let after_one = board.fen();
    play_uci(&mut board, "e7e5");

    let undone = board.undo().unwrap();
    assert_eq!(undone.san, "e5");
    assert_eq!(board.fen(), after_one);

    board.undo();
    assert_eq!(board.fen(), START_FEN);
    assert!(board.undo().is_none());
}

#[test]
fn test_fen_lists_en_passant_only_when_capturable() {
    let mut board = ChessBoard::new();
    play_uci(&mut board, "e2e4");
    assert_eq!(
        board.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );

    for uci in ["a7a6", "e4e5", "d7d5"] {
        play_uci(&mut board, uci);
    }
    assert_eq!(
        board.fen(),
        "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"
    );
}

#[test]
fn test_fen_after_does_not_mutate() {
    let board = ChessBoard::new();
    let after = board.fen_after(sq("e2"), sq("e4"), None).unwrap();
    assert!(after.starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"));
    assert_eq!(board.fen(), START_FEN);
}

#[test]
fn test_end_stalemate() {
    let board = ChessBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert!(board.is_game_over());
}

#[test]
fn test_end_insufficient_material() {
    let board = ChessBoard::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(board.is_draw());
}

#[test]
fn test_end_threefold_repetition() {
    let mut board = ChessBoard::new();
    for _ in 0..2 {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            play_uci(&mut board, uci);
        }
    }
    assert!(board.is_draw());
    board.undo();
    assert!(!board.is_draw());
}

#[test]
fn test_end_invalid_fen_is_rejected() {
    let mut board = ChessBoard::new();
    assert!(matches!(
        board.load_fen("not a fen"),
        Err(TrainerError::InvalidFen { .. })
    ));
    assert_eq!(board.fen(), START_FEN);
}

#[test]
fn test_token_resolution_forms() {
    let board = ChessBoard::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 3 3",
    )
    .unwrap();
    let moves = board.legal_moves();

    let by_san = resolve_token(&moves, "Qxf7#").unwrap();
    assert_eq!(by_san.uci, "f3f7");
    let stripped = resolve_token(&moves, "Qxf7").unwrap();
    assert_eq!(stripped.uci, "f3f7");
    let by_squares = resolve_token(&moves, "F3F7").unwrap();
    assert_eq!(by_squares.san, "Qxf7#");
    assert!(resolve_token(&moves, "Qh8").is_none());
}

#[test]
fn test_token_strip_decorations() {
    assert_eq!(strip_decorations("Qxd8+"), "Qxd8");
    assert_eq!(strip_decorations("Qxf7#"), "Qxf7");
    assert_eq!(strip_decorations("O-O"), "O-O");
}
