//! Analysis engine integration
//!
//! The trainer's opponent and hint source is an external UCI engine. This
//! module maps the trainee's skill level onto engine strength and search
//! limits, speaks the text protocol, and runs the process behind an async
//! worker so the session never blocks on it.
//!
//! # Architecture
//!
//! - [`SkillLevel`]: level `1..=25` → Elo, search limits, book preference
//! - [`uci`]: command formatting and reply parsing
//! - [`EngineAdapter`]: spawns the worker task; the session holds an
//!   [`EngineHandle`] (an [`AnalysisPort`]) and reads [`EngineEvent`]s
//!
//! # Integration Strategy
//!
//! The rules collaborator owns the live position. Before analysis:
//! 1. The session snapshots the position as FEN
//! 2. It submits a request tagged with purpose and FEN
//! 3. The worker answers with a result carrying the same tag
//! 4. The session drops results whose FEN no longer matches
//!
//! A computer move found this way still goes through the same rules check as
//! a trainee move.

pub mod adapter;
pub mod skill;
pub mod uci;

pub use adapter::{
    AnalysisPort, AnalysisRequest, AnalysisResult, EngineAdapter, EngineEvent, EngineEvents,
    EngineHandle, NoEngine,
};
pub use skill::{SearchLimits, SkillLevel};
pub use uci::Evaluation;

/// Why an analysis was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisPurpose {
    /// Evaluate the live position: recommendation for the trainee, or the
    /// computer's move on its own turn
    Primary,
    /// Evaluate the position after the recommended trainee move, previewing
    /// the opponent's reply
    ReplyPrediction,
}
