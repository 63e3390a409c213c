pub mod core;
pub mod game;
pub mod render;

pub use game::{SessionConfig, TrainingSession};
