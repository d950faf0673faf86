//! Core domain types for word ladders
//!
//! Words, the dictionary index, and the difficulty profiles. Everything here is
//! pure data with no search logic.

mod dictionary;
mod difficulty;
mod word;

pub use dictionary::{DictionaryError, WordIndex};
pub use difficulty::{Difficulty, DifficultyProfile, LengthBounds};
pub use word::{Word, WordError};
