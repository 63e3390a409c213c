//! Session controller - the move arbiter for one training game
//!
//! Owns the live position (through a [`RulesEngine`]) and every piece of
//! session state. All input enters through [`TrainingSession`] methods:
//! trainee commands, [`EngineEvent`]s from the analysis worker and timer
//! [`Wakeup`]s. The controller never blocks or sleeps; delays are requested
//! as [`Scheduled`] wakeups which the runtime delivers later.
//!
//! # State machine
//!
//! ```text
//!                     +--------- promotion needed ---------+
//!                     v                                    |
//! AwaitingPromotionChoice --choose--> commit <--legal move-- AwaitingTraineeInput
//!                                       |                        ^
//!                    opponent to move   |   trainee to move      |
//!                     +-----------------+------------------------+
//!                     v
//!            AwaitingOpponentMove --book/engine/random move--> commit
//!
//! any commit that ends the game --> Terminal (until new game)
//! ```
//!
//! # Module Structure
//!
//! - `controller` - [`TrainingSession`] and its operations
//! - `policy` - book-or-engine choice for the computer's moves
//! - `view` - [`SessionView`] snapshot for the rendering collaborator
//!
//! [`RulesEngine`]: crate::game::rules::RulesEngine
//! [`EngineEvent`]: crate::game::ai::EngineEvent

pub mod controller;
pub mod policy;
pub mod view;

pub use controller::{HintResponse, MoveOutcome, SelectOutcome, TrainingSession};
pub use view::{BookHint, SessionView};

use crate::core::settings::TrainerSettings;
use crate::game::ai::SkillLevel;
use crate::game::error::TrainerResult;
use std::fmt;
use std::time::Duration;

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingTraineeInput,
    AwaitingPromotionChoice,
    AwaitingOpponentMove,
    /// Game over; absorbing until a new game starts
    Terminal,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionPhase::AwaitingTraineeInput => "Your move",
            SessionPhase::AwaitingPromotionChoice => "Choose a promotion piece",
            SessionPhase::AwaitingOpponentMove => "Opponent thinking",
            SessionPhase::Terminal => "Game over",
        };
        f.write_str(label)
    }
}

/// State of the analysis engine as seen by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Starting,
    Ready,
    /// Permanent for the session; the computer plays random moves
    Unavailable,
}

/// A deferred continuation. Carries the game epoch it was scheduled in so
/// wakeups from before a reset or undo are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wakeup {
    /// Settle delay after a commit has passed; the computer may move
    OpponentTurn { epoch: u64 },
    /// Deadline for the engine's answer to the computer's position
    AnalysisDeadline { epoch: u64, fen: String },
}

/// A wakeup the runtime must deliver after `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub wakeup: Wakeup,
}

/// Start-up parameters for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub opening: String,
    /// Line to practise; the opening's main line when `None`
    pub line: Option<String>,
    pub skill: SkillLevel,
    pub settle_delay: Duration,
    pub engine_timeout: Duration,
    /// Seed for the computer's random choices; OS entropy when `None`
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opening: "philidor".to_string(),
            line: None,
            skill: SkillLevel::DEFAULT,
            settle_delay: Duration::from_millis(300),
            engine_timeout: Duration::from_secs(20),
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_settings(settings: &TrainerSettings) -> TrainerResult<Self> {
        Ok(Self {
            opening: settings.opening.clone(),
            line: None,
            skill: SkillLevel::try_new(settings.skill_level)?,
            settle_delay: settings.settle_delay(),
            engine_timeout: settings.engine_timeout(),
            rng_seed: settings.rng_seed,
        })
    }
}
