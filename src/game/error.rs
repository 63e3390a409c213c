//! Error types for game module
//!
//! The trainer never crashes a session on any of these. Every variant maps to
//! one of the recovery paths the controller takes:
//!
//! | Variant                 | Recovery                                          |
//! |-------------------------|---------------------------------------------------|
//! | `InputRejected`         | ignored, no state change, safe to retry           |
//! | `EngineUnavailable`     | random-move policy for the rest of the session    |
//! | `EngineTimeout`         | cached move if the FEN matches, else random move  |
//! | `StaleReply`            | reply discarded                                   |
//! | `CatalogInconsistency`  | book treated as exhausted, engine/random policy   |

use std::time::Duration;

/// Errors that can occur in trainer logic
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    /// Illegal move or selection attempted; nothing changed
    #[error("Input rejected: {reason}")]
    InputRejected { reason: String },

    /// The analysis engine never reached the ready state
    #[error("Analysis engine unavailable: {message}")]
    EngineUnavailable { message: String },

    /// A pending analysis request ran past its deadline
    #[error("Analysis for {fen} timed out after {elapsed:?}")]
    EngineTimeout { fen: String, elapsed: Duration },

    /// A reply whose request was superseded or whose position is gone
    #[error("Stale analysis reply for {fen}")]
    StaleReply { fen: String },

    /// A book token that does not resolve to a legal move
    #[error("Book move `{token}` at ply {ply} of {opening}/{line} is not legal")]
    CatalogInconsistency {
        opening: String,
        line: String,
        ply: usize,
        token: String,
    },

    /// Opening key not present in the repertoire
    #[error("Unknown opening: {key}")]
    UnknownOpening { key: String },

    /// Line key not present in the selected opening
    #[error("Unknown line `{line}` for opening {opening}")]
    UnknownLine { opening: String, line: String },

    /// Skill level outside the supported range
    #[error("Skill level {level} outside {min}..={max}")]
    InvalidSkillLevel { level: u8, min: u8, max: u8 },

    /// FEN text that failed to parse or describes an impossible position
    #[error("Invalid FEN `{fen}`: {message}")]
    InvalidFen { fen: String, message: String },

    /// Move rejected by the rules engine
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },
}

impl TrainerError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        TrainerError::InputRejected {
            reason: reason.into(),
        }
    }
}

/// Result type alias for trainer operations
pub type TrainerResult<T> = Result<T, TrainerError>;

/// Errors raised while starting or talking to the engine process
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine executable could not be launched
    #[error("Failed to spawn engine `{path}`: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the engine pipes failed
    #[error("Engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `uciok` / `readyok` did not arrive in time
    #[error("Engine handshake timed out waiting for `{expected}`")]
    HandshakeTimeout { expected: &'static str },

    /// The engine closed its output stream
    #[error("Engine closed its output")]
    Closed,

    /// A standard stream of the child process was not piped
    #[error("Engine process has no {stream} pipe")]
    MissingPipe { stream: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;
