//! Frontier ordering key
//!
//! The key is the sum of the alphabet positions of a word's letters (a=1 … z=26).
//! It depends only on the word, never on the target, so it is not an estimate of
//! the remaining distance and is not admissible. Searches that use it are
//! ordered deterministically but A* loses its optimality guarantee.

use crate::core::Word;

/// Sum of alphabet positions of the letters in `word`
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::solver::heuristic;
///
/// // c(3) + a(1) + t(20)
/// assert_eq!(heuristic(&Word::new("cat").unwrap()), 24);
/// ```
#[must_use]
pub fn heuristic(word: &Word) -> u64 {
    word.as_bytes()
        .iter()
        .map(|&b| u64::from(b.to_ascii_lowercase() - b'a') + 1)
        .sum()
}
