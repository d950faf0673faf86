//! Pair suggestion command

use crate::core::{Difficulty, Word, WordIndex};
use crate::solver::{Algorithm, suggest_pair};
use rand::Rng;

/// A suggested start/target pair with its verified ladder length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedPair {
    pub start: Word,
    pub target: Word,
    /// Steps in the A* ladder used to verify the pair
    pub length: usize,
}

/// Suggest up to `count` pairs for `difficulty`
///
/// Each suggestion is an independent attempt; failed attempts are skipped, so
/// fewer than `count` pairs may come back.
pub fn suggest_pairs<R: Rng + ?Sized>(
    index: &WordIndex,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Vec<SuggestedPair> {
    (0..count)
        .filter_map(|_| suggest_pair(index, difficulty, rng))
        .filter_map(|(start, target)| {
            let length = Algorithm::AStar.find_path(index, &start, &target)?.len();
            Some(SuggestedPair {
                start,
                target,
                length,
            })
        })
        .collect()
}
