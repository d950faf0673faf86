//! Side-by-side algorithm runs
//!
//! The index is read-only during a search, so the three algorithms can run
//! concurrently against the same borrowed dictionary.

use super::engine::SearchOutcome;
use super::strategy::Algorithm;
use crate::core::{Word, WordIndex};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// One algorithm's result with timing
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

impl AlgorithmRun {
    /// Ladder length, if a ladder was found
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.outcome.path.as_ref().map(super::SearchPath::len)
    }
}

/// Run every algorithm from `start` to `target` in parallel
///
/// Results come back in [`Algorithm::ALL`] order.
#[must_use]
pub fn compare_algorithms(index: &WordIndex, start: &Word, target: &Word) -> Vec<AlgorithmRun> {
    Algorithm::ALL
        .par_iter()
        .map(|&algorithm| {
            let started = Instant::now();
            let outcome = algorithm.search(index, start, target);
            AlgorithmRun {
                algorithm,
                outcome,
                duration: started.elapsed(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_all_in_order() {
        let index = WordIndex::from_strs(["cold", "cord", "card", "ward", "warm"]).unwrap();
        let runs = compare_algorithms(
            &index,
            &Word::new("cold").unwrap(),
            &Word::new("warm").unwrap(),
        );

        let order: Vec<Algorithm> = runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        for run in &runs {
            assert_eq!(run.path_len(), Some(4));
            assert!(run.outcome.expanded >= 4);
        }
    }

    #[test]
    fn unreachable_target() {
        let index = WordIndex::from_strs(["cold", "cord", "warm"]).unwrap();
        let runs = compare_algorithms(
            &index,
            &Word::new("cold").unwrap(),
            &Word::new("warm").unwrap(),
        );
        assert!(runs.iter().all(|r| r.path_len().is_none()));
    }
}
