//! Session-owned state records
//!
//! Plain data owned by the [`crate::game::session::TrainingSession`]. None of
//! these talk to the engine or the rules collaborator on their own; the
//! controller mutates them as it commits moves and receives analysis.
//!
//! # Records
//!
//! - [`MoveHistory`] - SAN list, doubles as the book ply index
//! - [`Selection`] - selected square and its legal moves
//! - [`HintBoard`] - book / engine / predicted highlight pairs
//! - [`PendingPromotion`] - move suspended until a piece is chosen
//! - [`PendingAnalyses`] - one outstanding request per analysis purpose
//! - [`GameOverState`] - terminal detection and result summary

pub mod game_over;
pub mod hints;
pub mod history;
pub mod pending;
pub mod promotion;
pub mod selection;

pub use game_over::GameOverState;
pub use hints::{HintBoard, HintPair};
pub use history::MoveHistory;
pub use pending::{PendingAnalyses, PendingRequest};
pub use promotion::{is_promotion_choice, PendingPromotion, PROMOTION_CHOICES};
pub use selection::Selection;
