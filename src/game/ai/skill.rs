//! Skill level and the engine strength it maps to
//!
//! The trainee picks an integer level in `1..=25`. The level drives three
//! things:
//!
//! - the engine's playing strength (`UCI_LimitStrength` / `UCI_Elo`)
//! - how deep and how long each analysis request searches
//! - how often the computer sticks to the book instead of asking the engine
//!
//! # Strength table
//!
//! | Level | Elo  |
//! |-------|------|
//! | 1     | 800  |
//! | 3     | 1000 |
//! | 5     | 1300 |
//! | 10    | 1700 |
//! | 15    | 2100 |
//! | 20    | 2500 |
//! | 25    | full strength, no limit |
//!
//! Levels missing from the table play at 1500.
//!
//! # Search limits
//!
//! | Purpose          | Depth                  | Move time              |
//! |------------------|------------------------|------------------------|
//! | Primary          | `clamp(level + 2, 10, 22)` | `max(1000, level * 200)` ms |
//! | Reply prediction | `clamp(level, 8, 18)`  | `max(500, level * 100)` ms |
//!
//! # Examples
//!
//! ```rust,ignore
//! let level = SkillLevel::try_new(5)?;
//! assert_eq!(level.elo(), 1300);
//! let limits = level.search_limits(AnalysisPurpose::Primary);
//! assert_eq!((limits.depth, limits.movetime_ms), (10, 1000));
//! ```

use super::AnalysisPurpose;
use crate::game::error::{TrainerError, TrainerResult};
use std::fmt;

/// Level at or above which the computer always plays the book move
pub const BOOK_THRESHOLD: u8 = 15;

/// Level at which the book-deviation chance reaches zero
const BOOK_MAX_LEVEL: f64 = 20.0;

/// Divisor spreading the deviation chance across low levels
const BOOK_SPREAD: f64 = 30.0;

/// Elo used for levels missing from the table
const DEFAULT_ELO: u32 = 1500;

const ELO_TABLE: [(u8, u32); 7] = [
    (1, 800),
    (3, 1000),
    (5, 1300),
    (10, 1700),
    (15, 2100),
    (20, 2500),
    (25, 3500),
];

/// Trainee-selected engine strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillLevel(u8);

/// Depth and time budget for one analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: u32,
    pub movetime_ms: u64,
}

impl SkillLevel {
    pub const MIN: SkillLevel = SkillLevel(1);
    pub const MAX: SkillLevel = SkillLevel(25);
    pub const DEFAULT: SkillLevel = SkillLevel(20);

    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN.0 && level <= Self::MAX.0 {
            Some(SkillLevel(level))
        } else {
            None
        }
    }

    /// Like [`SkillLevel::new`], with the range violation as an error
    pub fn try_new(level: u8) -> TrainerResult<Self> {
        Self::new(level).ok_or(TrainerError::InvalidSkillLevel {
            level,
            min: Self::MIN.0,
            max: Self::MAX.0,
        })
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Approximate Elo for this level
    pub fn elo(self) -> u32 {
        ELO_TABLE
            .iter()
            .find(|(level, _)| *level == self.0)
            .map(|(_, elo)| *elo)
            .unwrap_or(DEFAULT_ELO)
    }

    /// Everything below the maximum plays with `UCI_LimitStrength` on
    pub fn limits_strength(self) -> bool {
        self < Self::MAX
    }

    /// Whether the computer plays the book move, given a uniform roll in
    /// `[0, 1)`. Always true from [`BOOK_THRESHOLD`] up.
    pub fn prefers_book(self, roll: f64) -> bool {
        if self.0 >= BOOK_THRESHOLD {
            return true;
        }
        roll > (BOOK_MAX_LEVEL - f64::from(self.0)) / BOOK_SPREAD
    }

    pub fn search_limits(self, purpose: AnalysisPurpose) -> SearchLimits {
        let level = u32::from(self.0);
        match purpose {
            AnalysisPurpose::Primary => SearchLimits {
                depth: (level + 2).clamp(10, 22),
                movetime_ms: u64::from(level * 200).max(1000),
            },
            AnalysisPurpose::ReplyPrediction => SearchLimits {
                depth: level.clamp(8, 18),
                movetime_ms: u64::from(level * 100).max(500),
            },
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = TrainerError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::try_new(level)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limits_strength() {
            write!(f, "level {} (~{} Elo)", self.0, self.elo())
        } else {
            write!(f, "level {} (Maximum Strength)", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        //! Levels outside 1..=25 are rejected
        assert!(SkillLevel::new(0).is_none());
        assert!(SkillLevel::new(1).is_some());
        assert!(SkillLevel::new(25).is_some());
        assert!(matches!(
            SkillLevel::try_new(26),
            Err(TrainerError::InvalidSkillLevel {
                level: 26,
                min: 1,
                max: 25
            })
        ));
    }

    #[test]
    fn test_elo_table_and_default() {
        let elo = |n| SkillLevel::new(n).unwrap().elo();
        assert_eq!(elo(1), 800);
        assert_eq!(elo(5), 1300);
        assert_eq!(elo(20), 2500);
        assert_eq!(elo(7), 1500);
    }

    #[test]
    fn test_only_max_level_is_unlimited() {
        assert!(SkillLevel::new(24).unwrap().limits_strength());
        assert!(!SkillLevel::MAX.limits_strength());
    }

    #[test]
    fn test_book_preference() {
        //! Level 15+ always follows the book; low levels need a high roll
        let max = SkillLevel::MAX;
        let fifteen = SkillLevel::new(15).unwrap();
        let one = SkillLevel::MIN;
        for roll in [0.0, 0.3, 0.99] {
            assert!(max.prefers_book(roll));
            assert!(fifteen.prefers_book(roll));
        }
        // (20 - 1) / 30 = 0.6333
        assert!(!one.prefers_book(0.6));
        assert!(one.prefers_book(0.7));
    }

    #[test]
    fn test_search_limits_clamp() {
        let low = SkillLevel::MIN;
        assert_eq!(
            low.search_limits(AnalysisPurpose::Primary),
            SearchLimits {
                depth: 10,
                movetime_ms: 1000
            }
        );
        assert_eq!(
            low.search_limits(AnalysisPurpose::ReplyPrediction),
            SearchLimits {
                depth: 8,
                movetime_ms: 500
            }
        );

        let max = SkillLevel::MAX;
        assert_eq!(
            max.search_limits(AnalysisPurpose::Primary),
            SearchLimits {
                depth: 22,
                movetime_ms: 5000
            }
        );
        assert_eq!(
            max.search_limits(AnalysisPurpose::ReplyPrediction),
            SearchLimits {
                depth: 18,
                movetime_ms: 2500
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SkillLevel::new(5).unwrap().to_string(), "level 5 (~1300 Elo)");
        assert_eq!(SkillLevel::MAX.to_string(), "level 25 (Maximum Strength)");
    }
}
