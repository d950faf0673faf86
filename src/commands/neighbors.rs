//! Word inspection command
//!
//! Lists a word's one-letter neighbors with their key values.

use super::resolve_word;
use crate::core::{Word, WordIndex};
use crate::game::GameError;
use crate::solver::{heuristic, neighbors};

/// A word and its neighborhood
pub struct NeighborReport {
    pub word: Word,
    pub heuristic: u64,
    /// Neighbors in generation order with their key values
    pub neighbors: Vec<(Word, u64)>,
}

/// Inspect the neighborhood of `word`
///
/// # Errors
///
/// Returns an error if the word is not valid.
pub fn inspect_word(index: &WordIndex, word: &str) -> Result<NeighborReport, GameError> {
    let word = resolve_word(index, word)?;
    let neighbors = neighbors(index, &word)
        .into_iter()
        .map(|n| {
            let h = heuristic(&n);
            (n, h)
        })
        .collect();

    Ok(NeighborReport {
        heuristic: heuristic(&word),
        word,
        neighbors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_lists_neighbors() {
        let index = WordIndex::from_strs(["cat", "cot", "bat", "dog"]).unwrap();
        let report = inspect_word(&index, "Cat").unwrap();

        assert_eq!(report.word.text(), "cat");
        assert_eq!(report.heuristic, 24);
        let texts: Vec<&str> = report.neighbors.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(texts, ["bat", "cot"]);
        assert_eq!(report.neighbors[0].1, 23);
    }

    #[test]
    fn inspect_unknown_word() {
        let index = WordIndex::from_strs(["cat"]).unwrap();
        assert!(inspect_word(&index, "cow").is_err());
    }
}
