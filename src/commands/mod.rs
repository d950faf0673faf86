//! Command implementations

pub mod benchmark;
pub mod graph;
pub mod neighbors;
pub mod play;
pub mod solve;
pub mod suggest;

pub use benchmark::{AlgorithmSummary, BenchmarkResult, run_benchmark};
pub use graph::graph_for_pair;
pub use neighbors::{NeighborReport, inspect_word};
pub use play::run_play;
pub use solve::{SolveResult, solve_pair};
pub use suggest::{SuggestedPair, suggest_pairs};

use crate::core::{Word, WordIndex};
use crate::game::GameError;

/// Look up both words of a pair in the dictionary
///
/// # Errors
///
/// [`GameError::InvalidWord`] if either word is unusable and
/// [`GameError::LengthMismatch`] if their lengths differ.
pub fn resolve_pair(index: &WordIndex, start: &str, target: &str) -> Result<(Word, Word), GameError> {
    let start = resolve_word(index, start)?;
    let target = resolve_word(index, target)?;
    if start.len() != target.len() {
        return Err(GameError::LengthMismatch {
            expected: start.len(),
            actual: target.len(),
        });
    }
    Ok((start, target))
}

/// Look up one word typed on the command line, ignoring surrounding
/// whitespace and case
///
/// # Errors
///
/// [`GameError::InvalidWord`] if the word is malformed, unknown or banned.
pub fn resolve_word(index: &WordIndex, raw: &str) -> Result<Word, GameError> {
    let raw = raw.trim();
    Word::new(raw)
        .ok()
        .filter(|word| index.is_valid(word.text()))
        .ok_or_else(|| GameError::InvalidWord(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_valid_pair() {
        let index = WordIndex::from_strs(["cat", "dog", "cold"]).unwrap();
        let (start, target) = resolve_pair(&index, "CAT", " dog").unwrap();
        assert_eq!(start.text(), "cat");
        assert_eq!(target.text(), "dog");
    }

    #[test]
    fn rejects_bad_pairs() {
        let index = WordIndex::from_strs(["cat", "dog", "cold"]).unwrap();
        assert_eq!(
            resolve_pair(&index, "cat", "cold"),
            Err(GameError::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(
            resolve_pair(&index, "cat", "c4t"),
            Err(GameError::InvalidWord("c4t".to_string()))
        );
        assert_eq!(
            resolve_word(&index, "cow"),
            Err(GameError::InvalidWord("cow".to_string()))
        );
    }
}
