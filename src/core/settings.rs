//! Trainer configuration
//!
//! Every field has a default so a partial or missing `settings.json` still
//! yields a usable configuration.

use crate::core::error::{CoreError, CoreResult};
use crate::game::ai::SkillLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// User-tunable trainer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSettings {
    /// UCI engine executable (looked up on `PATH` when not absolute)
    pub engine_path: PathBuf,

    /// Initial skill level, see [`SkillLevel`]
    pub skill_level: u8,

    /// Opening selected at start-up
    pub opening: String,

    /// Pause after each committed move before the opponent replies, so the
    /// board has time to animate
    pub settle_delay_ms: u64,

    /// Deadline for a primary analysis request while the computer is to move
    pub engine_timeout_ms: u64,

    /// Deadline for the `uciok` / `readyok` handshake
    pub engine_init_timeout_ms: u64,

    /// Seed for the opponent's random choices; `None` seeds from the OS
    pub rng_seed: Option<u64>,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            engine_path: PathBuf::from("stockfish"),
            skill_level: SkillLevel::DEFAULT.get(),
            opening: "philidor".to_string(),
            settle_delay_ms: 300,
            engine_timeout_ms: 20_000,
            engine_init_timeout_ms: 5_000,
            rng_seed: None,
        }
    }
}

impl TrainerSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn engine_timeout(&self) -> Duration {
        Duration::from_millis(self.engine_timeout_ms)
    }

    pub fn engine_init_timeout(&self) -> Duration {
        Duration::from_millis(self.engine_init_timeout_ms)
    }

    /// The configured skill level, rejected if out of range
    pub fn skill(&self) -> CoreResult<SkillLevel> {
        SkillLevel::new(self.skill_level).ok_or_else(|| CoreError::InvalidSetting {
            field: "skill_level",
            message: format!(
                "{} is outside {}..={}",
                self.skill_level,
                SkillLevel::MIN.get(),
                SkillLevel::MAX.get()
            ),
        })
    }
}
