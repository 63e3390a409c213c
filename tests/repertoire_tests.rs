//! Repertoire Integrity Tests
//!
//! Replays catalog lines move by move against the rules engine:
//! - Every main line is fully legal
//! - Every other line is legal, except the two known bad tokens that the
//!   session treats as the end of the book

use opening_trainer::game::repertoire::{main_line_length, opening, openings, Line};
use opening_trainer::game::rules::{resolve_token, ChessBoard, RulesEngine};

/// Lines with a token that does not resolve: (opening, line, ply, token)
const KNOWN_INCONSISTENT: &[(&str, &str, usize, &str)] = &[
    ("london", "qgd", 14, "Qb1"),
    ("kingsgambit", "fischer", 16, "Nf4"),
];

/// Replay `line`; returns the first ply whose token is not a legal move
fn first_bad_ply(line: &Line) -> Option<(usize, &'static str)> {
    let mut board = ChessBoard::new();
    for (ply, token) in line.moves.iter().copied().enumerate() {
        let legal = board.legal_moves();
        let Some(m) = resolve_token(&legal, token) else {
            return Some((ply, token));
        };
        let (from, to, promotion) = (m.from, m.to, m.promotion);
        board
            .play(from, to, promotion)
            .unwrap_or_else(|e| panic!("{} resolved but failed to play: {}", token, e));
    }
    None
}

// ============================================================================
// Main Lines
// ============================================================================

#[test]
fn test_every_main_line_replays() {
    for opening in openings() {
        let line = opening.main().unwrap();
        assert!(!line.is_empty(), "{} main line is empty", opening.key);
        assert_eq!(
            first_bad_ply(line),
            None,
            "{}/{} has an illegal token",
            opening.key,
            line.key
        );
    }
}

#[test]
fn test_catalog_size() {
    let openings = openings();
    assert_eq!(openings.len(), 24);
    let lines: usize = openings.iter().map(|o| o.lines.len()).sum();
    assert_eq!(lines, 97);
}

#[test]
fn test_main_line_length_matches_catalog() {
    assert_eq!(main_line_length("philidor").unwrap(), 19);
    assert_eq!(
        main_line_length("sicilian").unwrap(),
        opening("sicilian").unwrap().main().unwrap().len()
    );
    assert!(main_line_length("grob").is_err());
}

// ============================================================================
// Other Lines
// ============================================================================

#[test]
fn test_other_lines_replay_or_are_known() {
    for opening in openings() {
        for line in opening.lines {
            let known = KNOWN_INCONSISTENT
                .iter()
                .find(|(o, l, _, _)| *o == opening.key && *l == line.key);
            match (first_bad_ply(line), known) {
                (None, None) => {}
                (Some((ply, token)), Some((_, _, known_ply, known_token))) => {
                    assert_eq!((ply, token), (*known_ply, *known_token));
                }
                (bad, known) => panic!(
                    "{}/{}: found {:?}, expected {:?}",
                    opening.key, line.key, bad, known
                ),
            }
        }
    }
}

#[test]
fn test_trainee_sides() {
    for key in ["philidor", "sicilian", "french", "carokann", "kingsindian"] {
        assert_eq!(
            opening(key).unwrap().trainee,
            shakmaty::Color::Black,
            "{} is a defence",
            key
        );
    }
    for key in ["london", "italian", "ruylopez", "scotch", "kingsgambit"] {
        assert_eq!(opening(key).unwrap().trainee, shakmaty::Color::White);
    }
}
