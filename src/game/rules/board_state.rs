//! Board state backed by `shakmaty`
//!
//! [`ChessBoard`] keeps the live [`Chess`] position plus an undo stack of
//! previous positions. Repetition keys (FEN without the move counters) are
//! recorded for every position reached so threefold repetition can be
//! reported as a draw.

use super::{LegalMove, MoveRecord, RulesEngine};
use crate::game::error::{TrainerError, TrainerResult};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Role, Square,
};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_PLIES: u32 = 100;

/// The bundled rules engine
#[derive(Debug, Clone)]
pub struct ChessBoard {
    position: Chess,
    /// Positions before each played ply, paired with that ply's record
    undo_stack: Vec<(Chess, MoveRecord)>,
    /// Repetition key of every position since the last reset, current last
    keys: Vec<String>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        let position = Chess::default();
        let keys = vec![repetition_key(&position)];
        Self {
            position,
            undo_stack: Vec::new(),
            keys,
        }
    }
}

impl ChessBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary FEN
    pub fn from_fen(fen: &str) -> TrainerResult<Self> {
        let mut board = Self::default();
        board.load_fen(fen)?;
        Ok(board)
    }

    /// Read-only access to the underlying position
    pub fn position(&self) -> &Chess {
        &self.position
    }

    fn find_move(&self, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
        self.position.legal_moves().into_iter().find(|m| {
            matches!(
                m.to_uci(CastlingMode::Standard),
                UciMove::Normal { from: f, to: t, promotion: p }
                    if f == from && t == to && p == promotion
            )
        })
    }

    fn illegal(from: Square, to: Square, promotion: Option<Role>) -> TrainerError {
        let suffix = promotion.map(|r| r.char().to_string()).unwrap_or_default();
        TrainerError::IllegalMove {
            message: format!("{}{}{} is not legal here", from, to, suffix),
        }
    }
}

/// Render a legal move with SAN and UCI, or `None` for non-board moves
fn describe(position: &Chess, m: Move) -> Option<LegalMove> {
    let UciMove::Normal {
        from,
        to,
        promotion,
    } = m.to_uci(CastlingMode::Standard)
    else {
        return None;
    };
    let san = san_with_suffix(position, m);
    Some(LegalMove {
        from,
        to,
        promotion,
        san,
        uci: uci_text(from, to, promotion),
        capture: m.is_capture(),
    })
}

fn san_with_suffix(position: &Chess, m: Move) -> String {
    let mut san = San::from_move(position, m).to_string();
    if let Ok(after) = position.clone().play(m) {
        if after.is_checkmate() {
            san.push('#');
        } else if after.is_check() {
            san.push('+');
        }
    }
    san
}

fn uci_text(from: Square, to: Square, promotion: Option<Role>) -> String {
    match promotion {
        Some(role) => format!("{}{}{}", from, to, role.char()),
        None => format!("{}{}", from, to),
    }
}

fn fen_of(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

/// FEN fields that identify a position for repetition purposes
fn repetition_key(position: &Chess) -> String {
    fen_of(position)
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}

impl RulesEngine for ChessBoard {
    fn turn(&self) -> Color {
        self.position.turn()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    fn legal_moves(&self) -> Vec<LegalMove> {
        self.position
            .legal_moves()
            .into_iter()
            .filter_map(|m| describe(&self.position, m))
            .collect()
    }

    fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> TrainerResult<MoveRecord> {
        let m = self
            .find_move(from, to, promotion)
            .ok_or_else(|| Self::illegal(from, to, promotion))?;
        let san = san_with_suffix(&self.position, m);
        let next = self
            .position
            .clone()
            .play(m)
            .map_err(|e| TrainerError::IllegalMove {
                message: e.to_string(),
            })?;

        let record = MoveRecord {
            from,
            to,
            san,
            uci: uci_text(from, to, promotion),
            promotion,
        };
        let previous = std::mem::replace(&mut self.position, next);
        self.undo_stack.push((previous, record.clone()));
        self.keys.push(repetition_key(&self.position));
        Ok(record)
    }

    fn undo(&mut self) -> Option<MoveRecord> {
        let (previous, record) = self.undo_stack.pop()?;
        self.position = previous;
        self.keys.pop();
        Some(record)
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_draw(&self) -> bool {
        if self.position.is_insufficient_material() {
            return true;
        }
        if self.position.halfmoves() >= FIFTY_MOVE_PLIES {
            return true;
        }
        match self.keys.last() {
            Some(current) => self.keys.iter().filter(|k| *k == current).count() >= 3,
            None => false,
        }
    }

    fn fen(&self) -> String {
        fen_of(&self.position)
    }

    fn fen_after(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> TrainerResult<String> {
        let m = self
            .find_move(from, to, promotion)
            .ok_or_else(|| Self::illegal(from, to, promotion))?;
        let after = self
            .position
            .clone()
            .play(m)
            .map_err(|e| TrainerError::IllegalMove {
                message: e.to_string(),
            })?;
        Ok(fen_of(&after))
    }

    fn load_fen(&mut self, fen: &str) -> TrainerResult<()> {
        let invalid = |message: String| TrainerError::InvalidFen {
            fen: fen.to_string(),
            message,
        };
        let parsed: Fen = fen.parse().map_err(|e| invalid(format!("{}", e)))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{}", e)))?;

        self.keys = vec![repetition_key(&position)];
        self.position = position;
        self.undo_stack.clear();
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
