//! Computer move policy
//!
//! How the computer picks its move on its own turn:
//!
//! 1. Inside the active line, roll a uniform `[0, 1)` value and ask the skill
//!    level whether to play the book move ([`SkillLevel::prefers_book`]). A
//!    token that does not resolve to a legal move is reported as
//!    `CatalogInconsistency` and treated as the end of the book.
//! 2. Otherwise ask the engine and play its best move if it is still legal.
//! 3. Without an engine answer (unavailable, timed out, illegal reply) replay a
//!    cached recommendation for this exact position, or pick a random legal
//!    move.
//!
//! Everything here is pure; the controller owns the RNG and the engine I/O.

use crate::game::ai::SkillLevel;
use crate::game::error::{TrainerError, TrainerResult};
use crate::game::repertoire::{Line, Opening};
use crate::game::rules::{resolve_token, LegalMove};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Where a fallback move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackSource {
    /// Cached engine recommendation for the same FEN
    Cached,
    Random,
}

/// The book move to play at `ply`, if the line reaches that far and the
/// skill roll says to follow it
pub fn book_move<'m>(
    opening: &Opening,
    line: &Line,
    ply: usize,
    legal: &'m [LegalMove],
    skill: SkillLevel,
    roll: f64,
) -> TrainerResult<Option<&'m LegalMove>> {
    let Some(token) = line.token(ply) else {
        return Ok(None);
    };
    if !skill.prefers_book(roll) {
        return Ok(None);
    }
    resolve_token(legal, token)
        .map(Some)
        .ok_or_else(|| TrainerError::CatalogInconsistency {
            opening: opening.key.to_string(),
            line: line.key.to_string(),
            ply,
            token: token.to_string(),
        })
}

/// The legal move an engine reply names. Matches full UCI first, then the
/// origin and destination squares alone.
pub fn resolve_engine_move<'m>(legal: &'m [LegalMove], uci: &str) -> Option<&'m LegalMove> {
    legal.iter().find(|m| m.uci == uci).or_else(|| {
        let squares = uci.get(0..4)?;
        legal.iter().find(|m| m.from_to() == squares)
    })
}

/// Move to play without a fresh engine answer
pub fn fallback_move<'m, R: Rng + ?Sized>(
    legal: &'m [LegalMove],
    cached: Option<&str>,
    rng: &mut R,
) -> Option<(&'m LegalMove, FallbackSource)> {
    if let Some(m) = cached.and_then(|uci| resolve_engine_move(legal, uci)) {
        return Some((m, FallbackSource::Cached));
    }
    legal.choose(rng).map(|m| (m, FallbackSource::Random))
}
