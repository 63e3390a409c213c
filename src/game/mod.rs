//! Trainer logic - openings, rules, engine analysis and the session arbiter
//!
//! Pure game logic is kept apart from I/O. Only `ai::adapter` and `runtime`
//! touch tokio; everything else is synchronous and testable without a clock.
//!
//! # Module Organization
//!
//! - `repertoire` - Static opening catalog (openings, named lines, allow-lists)
//! - `rules` - [`rules::RulesEngine`] contract and the `shakmaty`-backed board
//! - `resources` - Session-owned records (history, selection, hints, pending requests)
//! - `ai` - Skill levels, UCI codec and the async engine worker
//! - `feedback` - Classifies the trainee's moves against the book
//! - `session` - [`TrainingSession`], the move arbiter and its opponent policy
//! - `runtime` - Async driver: commands, engine events, timer wakeups
//! - `error` - Error taxonomy shared by the above
//!
//! # Data Flow
//!
//! ```text
//! Command ──> Runtime ──> TrainingSession ──> RulesEngine
//!                ^              │
//!                │              ├──AnalysisRequest──> engine worker
//!                │              │                          │
//!                └──EngineEvent─┴──────────────────────────┘
//! ```
//!
//! The live position is owned by the session alone. The engine worker and the
//! classifier only ever see FEN strings and move records.

pub mod ai;
pub mod error;
pub mod feedback;
pub mod repertoire;
pub mod resources;
pub mod rules;
pub mod runtime;
pub mod session;

// Re-export the main entry points
pub use error::{TrainerError, TrainerResult};
pub use runtime::{Command, Presenter, Runtime};
pub use session::{SessionConfig, TrainingSession};
