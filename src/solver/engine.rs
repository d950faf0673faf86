//! Best-first search over the implicit ladder graph
//!
//! One loop serves all three algorithms; a [`SearchStrategy`] supplies the
//! priority key and the revisit policy.

use super::frontier::Frontier;
use super::neighbors::neighbors;
use super::strategy::{RevisitPolicy, SearchStrategy};
use crate::core::{Word, WordIndex};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A ladder from a start word to a target word
///
/// Consecutive words differ in exactly one position. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    words: Vec<Word>,
}

impl SearchPath {
    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty());
        Self { words }
    }

    /// Number of edges (words − 1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// True for a zero-edge path (start equals target)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// First word of the ladder
    ///
    /// # Panics
    /// Never: a path always holds at least the start word.
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the ladder
    ///
    /// # Panics
    /// Never: a path always holds at least the start word.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// The word right after the start, if the path has any edges
    #[must_use]
    pub fn next_step(&self) -> Option<&Word> {
        self.words.get(1)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Result of one search run
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// The first path that reached the target, if any
    pub path: Option<SearchPath>,
    /// Words popped and expanded
    pub expanded: usize,
    /// Frontier insertions
    pub generated: usize,
}

/// A frontier node carries its own copy of the path so far
struct Node {
    cost: usize,
    path: Vec<Word>,
}

/// Run a best-first search from `start` to `target`
///
/// Returns an outcome with no path when either word is invalid, the lengths
/// differ, or the target is not reachable. A word is settled when it is popped
/// and expanded; settled words are never expanded again.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, WordIndex};
/// use word_ladder::solver::{UniformCost, best_first_search};
///
/// let index = WordIndex::from_strs(["cat", "cot", "cog", "dog"]).unwrap();
/// let start = Word::new("cat").unwrap();
/// let target = Word::new("dog").unwrap();
///
/// let outcome = best_first_search(&UniformCost, &index, &start, &target);
/// assert_eq!(outcome.path.unwrap().len(), 3);
/// ```
pub fn best_first_search<S: SearchStrategy + ?Sized>(
    strategy: &S,
    index: &WordIndex,
    start: &Word,
    target: &Word,
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    if start.len() != target.len()
        || !index.is_valid(start.text())
        || !index.is_valid(target.text())
    {
        return outcome;
    }

    let policy = strategy.revisit_policy();
    let mut frontier: Frontier<Node> = Frontier::new();
    let mut best_cost: FxHashMap<Word, usize> = FxHashMap::default();
    let mut settled: FxHashSet<Word> = FxHashSet::default();

    frontier.push(
        strategy.priority(0, start),
        Node {
            cost: 0,
            path: vec![start.clone()],
        },
    );
    best_cost.insert(start.clone(), 0);
    outcome.generated = 1;

    while let Some(entry) = frontier.pop() {
        let node = entry.item;
        let Some(current) = node.path.last() else {
            continue;
        };

        if settled.contains(current) {
            // Superseded by a cheaper entry that was expanded first
            continue;
        }

        if current == target {
            debug!(
                "Reached {target} from {start} in {} steps ({} expanded, {} generated)",
                node.path.len() - 1,
                outcome.expanded,
                outcome.generated
            );
            outcome.path = Some(SearchPath::from_words(node.path));
            return outcome;
        }

        settled.insert(current.clone());
        outcome.expanded += 1;

        let next_cost = node.cost + 1;
        for neighbor in neighbors(index, current) {
            if settled.contains(&neighbor) {
                continue;
            }

            let admit = match policy {
                RevisitPolicy::Never => !best_cost.contains_key(&neighbor),
                RevisitPolicy::IfCheaper => best_cost
                    .get(&neighbor)
                    .is_none_or(|&known| next_cost < known),
            };
            if !admit {
                continue;
            }

            best_cost.insert(neighbor.clone(), next_cost);
            let priority = strategy.priority(next_cost, &neighbor);
            let mut path = node.path.clone();
            path.push(neighbor);
            frontier.push(
                priority,
                Node {
                    cost: next_cost,
                    path,
                },
            );
            outcome.generated += 1;
        }
    }

    debug!(
        "No path from {start} to {target} ({} expanded)",
        outcome.expanded
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{AStar, Algorithm, GreedyBestFirst, UniformCost};
    use std::collections::VecDeque;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn texts(path: &SearchPath) -> Vec<&str> {
        path.words().iter().map(Word::text).collect()
    }

    fn small_index() -> WordIndex {
        WordIndex::from_strs(["cat", "cot", "cog", "dog", "dot", "cag"]).unwrap()
    }

    /// A denser dictionary with several competing routes and a detached island
    fn grid_index() -> WordIndex {
        WordIndex::from_strs([
            "cold", "cord", "card", "ward", "warm", "wore", "word", "worm", "corm", "form",
            "farm", "harm", "hard", "bold", "bolt", "boat", "coat", "cost", "most", "mist",
            "zzyx", "zzyy",
        ])
        .unwrap()
    }

    /// Plain breadth-first distance for cross-checking
    fn bfs_distance(index: &WordIndex, start: &Word, target: &Word) -> Option<usize> {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut queue = VecDeque::from([(start.clone(), 0)]);
        seen.insert(start.clone());
        while let Some((word, dist)) = queue.pop_front() {
            if &word == target {
                return Some(dist);
            }
            for next in neighbors(index, &word) {
                if seen.insert(next.clone()) {
                    queue.push_back((next, dist + 1));
                }
            }
        }
        None
    }

    fn assert_is_ladder(index: &WordIndex, path: &SearchPath) {
        for pair in path.words().windows(2) {
            assert!(pair[0].is_one_letter_from(&pair[1]), "{path} is not a ladder");
        }
        for word in path.words() {
            assert!(index.is_valid(word.text()));
        }
        let unique: FxHashSet<&Word> = path.words().iter().collect();
        assert_eq!(unique.len(), path.words().len(), "{path} repeats a word");
    }

    #[test]
    fn uniform_cost_small_example() {
        let index = small_index();
        let path = UniformCost.run(&index, "cat", "dog").unwrap();
        assert_eq!(path.len(), 3);
        assert_is_ladder(&index, &path);
        // cot's neighbors come out as dot before cog, so dot wins the tie
        assert_eq!(texts(&path), vec!["cat", "cot", "dot", "dog"]);
    }

    #[test]
    fn every_algorithm_finds_a_ladder() {
        let index = small_index();
        for algorithm in Algorithm::ALL {
            let path = algorithm.find_path(&index, &w("cat"), &w("dog")).unwrap();
            assert_eq!(path.start().text(), "cat");
            assert_eq!(path.target().text(), "dog");
            assert_is_ladder(&index, &path);
        }
    }

    #[test]
    fn uniform_cost_matches_bfs_on_every_pair() {
        let index = grid_index();
        let words = index.words_of_length(4).to_vec();
        for start in &words {
            for target in &words {
                let expected = bfs_distance(&index, start, target);
                let found = Algorithm::Uniform
                    .find_path(&index, start, target)
                    .map(|p| p.len());
                assert_eq!(found, expected, "{start} -> {target}");
            }
        }
    }

    #[test]
    fn all_algorithms_agree_on_reachability() {
        let index = grid_index();
        let words = index.words_of_length(4).to_vec();
        for start in &words {
            for target in &words {
                let reachable = bfs_distance(&index, start, target).is_some();
                for algorithm in Algorithm::ALL {
                    let path = algorithm.find_path(&index, start, target);
                    assert_eq!(path.is_some(), reachable, "{algorithm}: {start} -> {target}");
                    if let Some(path) = path {
                        assert_is_ladder(&index, &path);
                        assert!(path.len() >= bfs_distance(&index, start, target).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn greedy_never_expands_more_than_the_component() {
        let index = grid_index();
        let component = 20;
        let outcome = best_first_search(&GreedyBestFirst, &index, &w("cold"), &w("zzyx"));
        assert!(outcome.path.is_none());
        assert!(outcome.expanded <= component);
        // Each word is queued at most once
        assert!(outcome.generated <= component);
    }

    #[test]
    fn start_equals_target() {
        let index = small_index();
        for algorithm in Algorithm::ALL {
            let path = algorithm.find_path(&index, &w("cat"), &w("cat")).unwrap();
            assert!(path.is_empty());
            assert_eq!(path.next_step(), None);
        }
    }

    #[test]
    fn invalid_inputs_return_none() {
        let mut index = small_index();
        assert!(AStar.run(&index, "cat", "zzz").is_none());
        assert!(AStar.run(&index, "cat", "cats").is_none());

        index.set_banned([w("dog")]);
        assert!(AStar.run(&index, "cat", "dog").is_none());
    }

    #[test]
    fn banned_words_are_routed_around() {
        let mut index = WordIndex::from_strs(["cat", "cot", "cog", "dog", "dot"]).unwrap();
        assert_eq!(UniformCost.run(&index, "cat", "dog").unwrap().len(), 3);

        index.set_banned([w("cog")]);
        let path = UniformCost.run(&index, "cat", "dog").unwrap();
        assert_eq!(texts(&path), vec!["cat", "cot", "dot", "dog"]);

        index.set_banned([w("cot")]);
        assert!(UniformCost.run(&index, "cat", "dog").is_none());
    }

    #[test]
    fn deterministic_across_runs() {
        let index = grid_index();
        for algorithm in Algorithm::ALL {
            let first = algorithm.find_path(&index, &w("cold"), &w("warm"));
            for _ in 0..5 {
                assert_eq!(algorithm.find_path(&index, &w("cold"), &w("warm")), first);
            }
        }
    }

    #[test]
    fn path_display() {
        let index = small_index();
        let path = UniformCost.run(&index, "cat", "cog").unwrap();
        assert_eq!(path.to_string(), "cat → cot → cog");
    }

    trait RunExt {
        fn run(&self, index: &WordIndex, start: &str, target: &str) -> Option<SearchPath>;
    }

    impl<S: SearchStrategy> RunExt for S {
        fn run(&self, index: &WordIndex, start: &str, target: &str) -> Option<SearchPath> {
            best_first_search(self, index, &w(start), &w(target)).path
        }
    }
}
