//! Read-only snapshot handed to the rendering collaborator
//!
//! The renderer gets everything it paints from one [`SessionView`], built
//! fresh after each state change. It never holds a reference into the live
//! session.

use super::{EngineStatus, SessionPhase};
use crate::game::ai::{Evaluation, SkillLevel};
use crate::game::feedback::Feedback;
use crate::game::repertoire::Line;
use crate::game::resources::{HintBoard, HintPair, PendingPromotion};
use shakmaty::{Color, Piece, Square};
use std::fmt;

/// Shown instead of a book hint once the line is exhausted
pub const OUT_OF_BOOK: &str = "Out of opening book - play your best moves!";

/// Plies after the end of the line still labelled as leaving the book
const LEAVING_BOOK_PLIES: usize = 6;

/// Everything needed to paint the board and the side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub pieces: Vec<(Square, Piece)>,
    /// Black at the bottom
    pub flipped: bool,
    pub trainee: Color,
    pub turn: Color,
    pub phase: SessionPhase,
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
    pub hints: HintBoard,
    pub promotion: Option<PendingPromotion>,
    pub opening_name: &'static str,
    pub opening_description: &'static str,
    pub line_key: &'static str,
    /// Numbered pairs, `1. e4 e5`
    pub moves: Vec<String>,
    pub full_moves: usize,
    pub position_label: String,
    /// `None` once the line is exhausted
    pub book: Option<BookHint>,
    pub evaluation: Option<Evaluation>,
    pub depth: Option<u32>,
    pub feedback: Option<Feedback>,
    pub skill: SkillLevel,
    pub engine: EngineStatus,
    pub result: Option<&'static str>,
}

impl SessionView {
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, piece)| *piece)
    }

    pub fn trainee_to_move(&self) -> bool {
        self.turn == self.trainee
    }

    /// Engine-side highlight for the side to move
    pub fn engine_hint(&self) -> Option<HintPair> {
        self.hints.live_engine_hint(self.trainee_to_move())
    }

    /// Side panel text for the book move
    pub fn book_text(&self) -> String {
        match &self.book {
            Some(hint) => hint.describe(),
            None => OUT_OF_BOOK.to_string(),
        }
    }
}

/// The next book move of the active line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookHint {
    pub move_number: usize,
    /// Who plays the move
    pub color: Color,
    pub token: &'static str,
    pub trainee_to_move: bool,
}

impl BookHint {
    /// The hint for ply index `ply`, if the line reaches it
    pub fn at(line: &Line, ply: usize, trainee_to_move: bool) -> Option<Self> {
        let token = line.token(ply)?;
        Some(Self {
            move_number: ply / 2 + 1,
            color: if ply % 2 == 0 {
                Color::White
            } else {
                Color::Black
            },
            token,
            trainee_to_move,
        })
    }

    pub fn describe(&self) -> String {
        if self.trainee_to_move {
            format!(
                "Next Book Move: {} (Your turn - Try to find this move!)",
                self
            )
        } else {
            let side = match self.color {
                Color::White => "White",
                Color::Black => "Black",
            };
            format!("Expected {} Response: {}", side, self)
        }
    }
}

impl fmt::Display for BookHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = match self.color {
            Color::White => ".",
            Color::Black => "...",
        };
        write!(f, "{}{} {}", self.move_number, dots, self.token)
    }
}

/// Phase of the game from the number of plies played
pub fn position_label(plies: usize, line_len: usize, opening_name: &str) -> String {
    match plies {
        0 => "Starting position".to_string(),
        1..=4 => "Opening moves".to_string(),
        5..=10 => format!("Early {}", opening_name),
        n if n <= line_len => format!("{} development", opening_name),
        n if n <= line_len + LEAVING_BOOK_PLIES => "Leaving book moves".to_string(),
        _ => "Middle game".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: Line = Line {
        key: "main",
        moves: &["e4", "e5", "Nf3", "d6"],
    };

    #[test]
    fn test_position_labels() {
        let name = "Philidor Defense";
        assert_eq!(position_label(0, 19, name), "Starting position");
        assert_eq!(position_label(4, 19, name), "Opening moves");
        assert_eq!(position_label(5, 19, name), "Early Philidor Defense");
        assert_eq!(position_label(11, 19, name), "Philidor Defense development");
        assert_eq!(position_label(19, 19, name), "Philidor Defense development");
        assert_eq!(position_label(20, 19, name), "Leaving book moves");
        assert_eq!(position_label(25, 19, name), "Leaving book moves");
        assert_eq!(position_label(26, 19, name), "Middle game");
    }

    #[test]
    fn test_short_line_labels() {
        //! Early-phase labels win over the book length for short lines
        assert_eq!(position_label(6, 4, "Scotch"), "Early Scotch");
        assert_eq!(position_label(11, 4, "Scotch"), "Middle game");
    }

    #[test]
    fn test_book_hint_text() {
        let white = BookHint::at(&LINE, 2, true).unwrap();
        assert_eq!(white.to_string(), "2. Nf3");
        assert_eq!(
            white.describe(),
            "Next Book Move: 2. Nf3 (Your turn - Try to find this move!)"
        );

        let black = BookHint::at(&LINE, 3, false).unwrap();
        assert_eq!(black.to_string(), "2... d6");
        assert_eq!(black.describe(), "Expected Black Response: 2... d6");

        assert!(BookHint::at(&LINE, 4, true).is_none());
    }
}
