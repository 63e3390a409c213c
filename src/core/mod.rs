//! Core module - configuration and application infrastructure
//!
//! # Contents
//!
//! - [`TrainerSettings`] - User preferences (engine path, skill level, timings)
//! - [`settings_persistence`] - JSON load/save under the user config directory
//! - [`CoreError`] - Errors raised by the above

pub mod error;
pub mod settings;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use settings::TrainerSettings;
pub use settings_persistence::{load_settings, save_settings};
