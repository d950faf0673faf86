//! Graph export command

use super::resolve_pair;
use crate::core::{Word, WordIndex};
use crate::game::GameError;
use crate::solver::graph::MAX_NEIGHBORS_PER_WORD;
use crate::solver::{LadderGraph, SearchPath, compare_algorithms};

/// Graph around every algorithm's ladder between two words
///
/// # Errors
///
/// Returns an error if either word is not valid or their lengths differ.
pub fn graph_for_pair(index: &WordIndex, start: &str, target: &str) -> Result<LadderGraph, GameError> {
    let (start, target) = resolve_pair(index, start, target)?;
    let paths: Vec<Vec<Word>> = compare_algorithms(index, &start, &target)
        .into_iter()
        .filter_map(|run| run.outcome.path)
        .map(SearchPath::into_words)
        .collect();
    if paths.is_empty() {
        return Err(GameError::NoPathExists {
            start: start.to_string(),
            target: target.to_string(),
        });
    }

    let views: Vec<&[Word]> = paths.iter().map(Vec::as_slice).collect();
    Ok(LadderGraph::around_paths(index, &views, MAX_NEIGHBORS_PER_WORD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_covers_all_ladders() {
        let index = WordIndex::from_strs(["cat", "cot", "cog", "dog", "dot", "cag"]).unwrap();
        let graph = graph_for_pair(&index, "cat", "dog").unwrap();

        for word in ["cat", "cot", "dog"] {
            assert!(graph.heuristic_of(word).is_some());
        }
        assert!(!graph.edges().is_empty());
    }

    #[test]
    fn graph_needs_a_ladder() {
        let index = WordIndex::from_strs(["cat", "cot", "ant"]).unwrap();
        assert!(matches!(
            graph_for_pair(&index, "cat", "ant"),
            Err(GameError::NoPathExists { .. })
        ));
    }
}
