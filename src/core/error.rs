//! Errors raised while loading, validating or saving [`TrainerSettings`]
//!
//! [`TrainerSettings`]: crate::core::TrainerSettings

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading or writing `settings.json` failed
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    /// `settings.json` is not valid JSON for the settings shape
    #[error("Malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that parses but is outside its accepted range
    #[error("Invalid setting `{field}`: {message}")]
    InvalidSetting { field: &'static str, message: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
