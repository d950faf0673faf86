//! Single-letter substitution neighbors
//!
//! The adjacency relation is never materialized: it is recomputed from the
//! [`WordIndex`] on every call, so it always reflects the current banned set.

use crate::core::{Word, WordIndex};

/// All valid words exactly one substitution away from `word`
///
/// Tries every position with every lowercase letter and keeps results that are
/// in the dictionary and not banned. The output is duplicate-free and ordered
/// by position, then by letter, which keeps callers deterministic.
///
/// Costs `len × 25` O(1) membership checks.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, WordIndex};
/// use word_ladder::solver::neighbors;
///
/// let index = WordIndex::from_strs(["cat", "cot", "bat", "dog"]).unwrap();
/// let found: Vec<String> = neighbors(&index, &Word::new("cat").unwrap())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(found, vec!["bat", "cot"]);
/// ```
#[must_use]
pub fn neighbors(index: &WordIndex, word: &Word) -> Vec<Word> {
    let mut found = Vec::new();
    let mut buffer = word.as_bytes().to_vec();

    for position in 0..buffer.len() {
        let original = buffer[position];
        for letter in b'a'..=b'z' {
            if letter == original {
                continue;
            }
            buffer[position] = letter;
            if let Ok(candidate) = std::str::from_utf8(&buffer)
                && let Some(neighbor) = index.get_valid(candidate)
            {
                found.push(neighbor.clone());
            }
        }
        buffer[position] = original;
    }

    found
}
