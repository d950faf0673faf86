//! Game rules: sessions, scoring and the errors players see

mod error;
pub mod scoring;
mod session;

pub use error::GameError;
pub use scoring::{ScoreBreakdown, ScoreInput, calculate_score};
pub use session::{GameSession, GameState};
