//! Game over state tracking and result summary
//!
//! Recomputed after every committed move. Once the state is anything but
//! `Playing` the session is terminal: no more input is accepted and no
//! opponent move is scheduled until a new game starts. The final position
//! stays inspectable.
//!
//! # Result summary
//!
//! Messages are phrased from the trainee's perspective:
//!
//! | State                  | Message                | Severity  |
//! |------------------------|------------------------|-----------|
//! | checkmate, trainee won | `Checkmate! You win!`  | Success   |
//! | checkmate, trainee lost| `Checkmate! You lose.` | Error     |
//! | stalemate              | `Stalemate - Draw!`    | Info      |
//! | other draw             | `Draw!`                | Info      |

use crate::game::feedback::Severity;
use crate::game::rules::RulesEngine;
use shakmaty::Color;

/// End state of the current game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameOverState {
    #[default]
    Playing,

    /// The side to move is mated
    Checkmate { winner: Color },

    Stalemate,

    /// Insufficient material, fifty-move rule or threefold repetition
    Draw,
}

impl GameOverState {
    /// Classify the position held by `rules`
    pub fn detect<R: RulesEngine + ?Sized>(rules: &R) -> Self {
        if rules.is_checkmate() {
            GameOverState::Checkmate {
                winner: rules.turn().other(),
            }
        } else if rules.is_stalemate() {
            GameOverState::Stalemate
        } else if rules.is_draw() {
            GameOverState::Draw
        } else {
            GameOverState::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverState::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Result text for a trainee playing `trainee`
    pub fn message(&self, trainee: Color) -> &'static str {
        match self {
            GameOverState::Checkmate { winner } if *winner == trainee => "Checkmate! You win!",
            GameOverState::Checkmate { .. } => "Checkmate! You lose.",
            GameOverState::Stalemate => "Stalemate - Draw!",
            GameOverState::Draw => "Draw!",
            GameOverState::Playing => "Game Over",
        }
    }

    pub fn severity(&self, trainee: Color) -> Severity {
        match self {
            GameOverState::Checkmate { winner } if *winner == trainee => Severity::Success,
            GameOverState::Checkmate { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }
}
