//! Chess rules module - the position collaborator behind the session
//!
//! The session controller never generates or validates moves itself. It talks
//! to a [`RulesEngine`], which owns the live position and answers the
//! questions the controller needs: whose turn it is, which moves are legal
//! (optionally from one square), what a move looks like in SAN, how to undo a
//! ply, whether the game is over, and how to snapshot the position as FEN.
//!
//! # Module Structure
//!
//! - `board_state` - [`ChessBoard`], the bundled implementation over `shakmaty`
//!
//! # Move identity
//!
//! Moves are addressed by origin/destination squares plus an optional
//! promotion role. Castling is the king's two-square move (`e1g1`), never the
//! king-takes-rook encoding.

pub mod board_state;

#[cfg(test)]
mod tests;

pub use board_state::ChessBoard;

use crate::game::error::TrainerResult;
use shakmaty::{Color, Piece, Role, Square};

/// A legal move in the current position, with its notations precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
    /// SAN including `+`/`#` decorations
    pub san: String,
    /// UCI text, e.g. `e2e4` or `e7e8q`
    pub uci: String,
    pub capture: bool,
}

impl LegalMove {
    /// Whether a book token denotes this move.
    ///
    /// A token matches on exact SAN, on `from`+`to` squares (case-insensitive),
    /// or on SAN with the check/mate decoration stripped.
    pub fn matches_token(&self, token: &str) -> bool {
        if self.san == token {
            return true;
        }
        if self.from_to() == token.to_lowercase() {
            return true;
        }
        strip_decorations(&self.san) == token
    }

    /// Origin and destination squares as text, e.g. `g1f3`
    pub fn from_to(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

/// Result record of an executed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub san: String,
    pub uci: String,
    pub promotion: Option<Role>,
}

/// SAN without trailing `+` / `#`
pub fn strip_decorations(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}

/// Find the legal move a book token refers to
pub fn resolve_token<'a>(moves: &'a [LegalMove], token: &str) -> Option<&'a LegalMove> {
    moves.iter().find(|m| m.matches_token(token))
}

/// Contract of the position collaborator
pub trait RulesEngine {
    /// Side to move
    fn turn(&self) -> Color;

    /// Piece on `square`, if any
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// All legal moves in the current position
    fn legal_moves(&self) -> Vec<LegalMove>;

    /// Legal moves whose origin is `square`
    fn legal_moves_from(&self, square: Square) -> Vec<LegalMove> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == square)
            .collect()
    }

    /// Execute a move. Fails with `IllegalMove` and leaves the position
    /// untouched if the move is not legal.
    fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> TrainerResult<MoveRecord>;

    /// Take back the last ply, returning its record
    fn undo(&mut self) -> Option<MoveRecord>;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Insufficient material, fifty-move rule or threefold repetition
    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate() || self.is_draw()
    }

    /// FEN of the current position
    fn fen(&self) -> String;

    /// FEN of the position after playing a move, without changing anything
    fn fen_after(&self, from: Square, to: Square, promotion: Option<Role>)
        -> TrainerResult<String>;

    /// Replace the position from FEN, clearing the undo stack
    fn load_fen(&mut self, fen: &str) -> TrainerResult<()>;

    /// Back to the initial position
    fn reset(&mut self);
}
