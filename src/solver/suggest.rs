//! Start/target pair generation
//!
//! Picks a start word, walks a random number of breadth levels away from it,
//! picks a target from the last level and keeps the pair only if an A* ladder
//! between them has a length the difficulty accepts.

use super::neighbors::neighbors;
use super::strategy::Algorithm;
use crate::core::{Difficulty, Word, WordIndex};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Attempts before giving up on a suggestion
pub const MAX_ATTEMPTS: usize = 50;

/// Words exactly `distance` breadth levels from `start`
///
/// Levels are built from unvisited neighbors only, so each word appears in the
/// first level that reaches it. Returns an empty list if expansion dies out
/// before reaching `distance`. Order follows discovery and is deterministic.
#[must_use]
pub fn layer_at_distance(index: &WordIndex, start: &Word, distance: usize) -> Vec<Word> {
    let mut visited: FxHashSet<Word> = FxHashSet::default();
    visited.insert(start.clone());
    let mut level = vec![start.clone()];

    for _ in 0..distance {
        let mut next_level = Vec::new();
        for word in &level {
            for neighbor in neighbors(index, word) {
                if visited.insert(neighbor.clone()) {
                    next_level.push(neighbor);
                }
            }
        }
        level = next_level;
        if level.is_empty() {
            break;
        }
    }

    level
}

/// Suggest a start/target pair whose A* ladder length suits `difficulty`
///
/// Uses the index's current banned set. Returns `None` if fewer than two valid
/// words exist at the chosen length or no pair verifies within
/// [`MAX_ATTEMPTS`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_ladder::core::{Difficulty, WordIndex};
/// use word_ladder::solver::suggest_pair;
///
/// let index = WordIndex::from_strs(["cat", "cot", "cog", "dog"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// if let Some((start, target)) = suggest_pair(&index, Difficulty::Beginner, &mut rng) {
///     assert_ne!(start, target);
/// }
/// ```
pub fn suggest_pair<R: Rng + ?Sized>(
    index: &WordIndex,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(Word, Word)> {
    let profile = difficulty.profile();
    let length = rng.random_range(profile.word_lengths.clone());

    let valid = index.valid_words_of_length(length);
    if valid.len() < 2 {
        debug!(
            "Only {} valid words of length {length}, cannot suggest a pair",
            valid.len()
        );
        return None;
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let Some(&start) = valid.choose(rng) else {
            break;
        };
        let distance = rng.random_range(profile.target_distance.clone());

        let layer = layer_at_distance(index, start, distance);
        let candidates: Vec<&Word> = layer.iter().filter(|w| *w != start).collect();
        let Some(&target) = candidates.choose(rng) else {
            continue;
        };

        if let Some(path) = Algorithm::AStar.find_path(index, start, target) {
            if profile.suggestion_lengths.contains(path.len()) {
                debug!(
                    "Suggested {start} -> {target} ({} steps) on attempt {attempt}",
                    path.len()
                );
                return Some((start.clone(), target.clone()));
            }
            debug!(
                "Rejected {start} -> {target}: {} steps outside {}",
                path.len(),
                profile.suggestion_lengths
            );
        }
    }

    debug!("No {difficulty} pair found after {MAX_ATTEMPTS} attempts");
    None
}
