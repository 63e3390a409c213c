//! Selection state for the square the trainee has picked

use crate::game::rules::LegalMove;
use shakmaty::Square;

/// Currently selected square and the legal moves from it
#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub square: Option<Square>,
    pub moves: Vec<LegalMove>,
}

impl Selection {
    pub fn select(&mut self, square: Square, moves: Vec<LegalMove>) {
        self.square = Some(square);
        self.moves = moves;
    }

    pub fn clear(&mut self) {
        self.square = None;
        self.moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.square.is_some()
    }

    /// Destination squares highlighted for the selection
    pub fn targets(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|m| m.to)
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.moves.iter().any(|m| m.to == square)
    }
}
