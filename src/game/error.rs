//! Recoverable game errors
//!
//! None of these are fatal; callers re-prompt the player.

use std::fmt;

/// Why a game operation was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Not in the dictionary, malformed, or currently banned
    InvalidWord(String),
    /// Word length differs from the session's word length
    LengthMismatch { expected: usize, actual: usize },
    /// Move changes zero or several letters
    NonAdjacentMove { from: String, to: String },
    /// No ladder connects the two words
    NoPathExists { start: String, target: String },
    /// The optimal ladder length is outside the difficulty's range
    DifficultyRangeViolation { length: usize, allowed: String },
    /// No hints left
    HintBudgetExhausted,
    /// `start_game` has not succeeded yet
    NoActiveGame,
    /// The game is already won or timed out
    GameOver,
    /// Scoring requested before the target was reached
    NotSolved,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "'{word}' is not a valid word"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected a {expected}-letter word, got {actual} letters")
            }
            Self::NonAdjacentMove { from, to } => {
                write!(f, "'{to}' must differ from '{from}' by exactly one letter")
            }
            Self::NoPathExists { start, target } => {
                write!(f, "No ladder connects '{start}' and '{target}'")
            }
            Self::DifficultyRangeViolation { length, allowed } => write!(
                f,
                "Shortest ladder has {length} steps; this difficulty needs {allowed}"
            ),
            Self::HintBudgetExhausted => write!(f, "No hints remaining"),
            Self::NoActiveGame => write!(f, "No game in progress"),
            Self::GameOver => write!(f, "The game is over"),
            Self::NotSolved => write!(f, "The target has not been reached yet"),
        }
    }
}

impl std::error::Error for GameError {}
