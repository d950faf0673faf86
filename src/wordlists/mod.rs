//! Word lists for the ladder dictionary
//!
//! The default corpus is compiled into the binary; `loader` reads others from
//! disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{DictionaryError, WordIndex};

/// Build a [`WordIndex`] over the embedded corpus
///
/// # Errors
///
/// Only fails if the embedded list is empty.
pub fn default_index() -> Result<WordIndex, DictionaryError> {
    WordIndex::from_strs(WORDS)
}
