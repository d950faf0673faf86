//! Pair solving command
//!
//! Runs one algorithm, or all of them side by side, between two words.

use super::resolve_pair;
use crate::core::{Word, WordIndex};
use crate::game::GameError;
use crate::solver::{Algorithm, AlgorithmRun, compare_algorithms};
use std::time::Instant;

/// Result of solving a pair
pub struct SolveResult {
    pub start: Word,
    pub target: Word,
    /// One run per requested algorithm
    pub runs: Vec<AlgorithmRun>,
}

impl SolveResult {
    /// Shortest ladder length found by any run
    #[must_use]
    pub fn best_length(&self) -> Option<usize> {
        self.runs.iter().filter_map(AlgorithmRun::path_len).min()
    }
}

/// Solve `start -> target` with `algorithm`, or every algorithm when `None`
///
/// An unreachable target is not an error; the runs simply carry no path.
///
/// # Errors
///
/// Returns an error if either word is not valid or their lengths differ.
pub fn solve_pair(
    index: &WordIndex,
    start: &str,
    target: &str,
    algorithm: Option<Algorithm>,
) -> Result<SolveResult, GameError> {
    let (start, target) = resolve_pair(index, start, target)?;

    let runs = match algorithm {
        Some(algorithm) => {
            let started = Instant::now();
            let outcome = algorithm.search(index, &start, &target);
            vec![AlgorithmRun {
                algorithm,
                outcome,
                duration: started.elapsed(),
            }]
        }
        None => compare_algorithms(index, &start, &target),
    };

    Ok(SolveResult {
        start,
        target,
        runs,
    })
}
