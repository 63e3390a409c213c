//! Highlight records shown on top of the board
//!
//! Three independent square pairs: the next book move, the engine's
//! recommendation for the trainee and the predicted opponent reply. The
//! session decides which are live; the renderer only paints what it is given.

use crate::game::rules::LegalMove;
use shakmaty::Square;

/// An origin/destination pair to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPair {
    pub from: Square,
    pub to: Square,
}

impl HintPair {
    /// Parse the squares out of UCI move text (`e2e4`, `e7e8q`)
    pub fn from_uci(uci: &str) -> Option<Self> {
        let from = uci.get(0..2)?.parse().ok()?;
        let to = uci.get(2..4)?.parse().ok()?;
        Some(Self { from, to })
    }

    pub fn contains(&self, square: Square) -> bool {
        self.from == square || self.to == square
    }
}

impl From<&LegalMove> for HintPair {
    fn from(m: &LegalMove) -> Self {
        Self {
            from: m.from,
            to: m.to,
        }
    }
}

/// The three highlight slots
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HintBoard {
    /// Present only on the trainee's turn while the line has a token for this ply
    pub book: Option<HintPair>,
    /// Engine recommendation for the trainee's position
    pub engine: Option<HintPair>,
    /// Expected opponent reply after the recommended move
    pub predicted: Option<HintPair>,
}

impl HintBoard {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The engine-side hint live for display: the recommendation on the
    /// trainee's turn, the prediction otherwise. Never both.
    pub fn live_engine_hint(&self, trainee_to_move: bool) -> Option<HintPair> {
        if trainee_to_move {
            self.engine
        } else {
            self.predicted
        }
    }
}
