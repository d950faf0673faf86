//! Ladder graph data for visualization
//!
//! Exposes nodes, undirected edges and per-node key values. Layout is left to
//! whoever draws the graph.

use super::heuristic::heuristic;
use super::neighbors::neighbors;
use crate::core::{Word, WordIndex};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Neighbors kept per word in the path-centred view
pub const MAX_NEIGHBORS_PER_WORD: usize = 5;

/// A snapshot of part of the ladder graph
#[derive(Debug, Clone, Default)]
pub struct LadderGraph {
    nodes: Vec<Word>,
    edges: Vec<(Word, Word)>,
    heuristics: FxHashMap<Word, u64>,
}

/// Neighbors sorted by key value, then alphabetically
fn ranked_neighbors(index: &WordIndex, word: &Word) -> Vec<Word> {
    let mut found = neighbors(index, word);
    found.sort_by(|a, b| heuristic(a).cmp(&heuristic(b)).then_with(|| a.cmp(b)));
    found
}

fn ordered_pair(a: &Word, b: &Word) -> (Word, Word) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl LadderGraph {
    /// The neighbourhood of a set of ladders
    ///
    /// Nodes are every word on the given paths plus up to `max_neighbors`
    /// lowest-key neighbors of each. Each node then contributes edges to at most
    /// `max_neighbors` lowest-key neighbors inside the node set.
    #[must_use]
    pub fn around_paths(index: &WordIndex, paths: &[&[Word]], max_neighbors: usize) -> Self {
        let path_words: BTreeSet<Word> = paths.iter().flat_map(|p| p.iter().cloned()).collect();

        let mut node_set = path_words.clone();
        for word in &path_words {
            node_set.extend(ranked_neighbors(index, word).into_iter().take(max_neighbors));
        }

        let mut edge_set: BTreeSet<(Word, Word)> = BTreeSet::new();
        for word in &node_set {
            let linked = ranked_neighbors(index, word)
                .into_iter()
                .filter(|n| node_set.contains(n))
                .take(max_neighbors);
            for neighbor in linked {
                edge_set.insert(ordered_pair(word, &neighbor));
            }
        }

        Self::assemble(node_set.into_iter().collect(), edge_set.into_iter().collect())
    }

    /// Full adjacency over every valid word of one length
    #[must_use]
    pub fn for_length(index: &WordIndex, length: usize) -> Self {
        let nodes: Vec<Word> = index
            .valid_words_of_length(length)
            .into_iter()
            .cloned()
            .collect();

        let mut edges: Vec<(Word, Word)> = nodes
            .par_iter()
            .flat_map_iter(|word| {
                neighbors(index, word)
                    .into_iter()
                    .filter(move |n| word < n)
                    .map(move |n| (word.clone(), n))
            })
            .collect();
        edges.sort_unstable();

        Self::assemble(nodes, edges)
    }

    fn assemble(nodes: Vec<Word>, edges: Vec<(Word, Word)>) -> Self {
        let heuristics = nodes.iter().map(|w| (w.clone(), heuristic(w))).collect();
        Self {
            nodes,
            edges,
            heuristics,
        }
    }

    /// Nodes in alphabetical order
    #[must_use]
    pub fn nodes(&self) -> &[Word] {
        &self.nodes
    }

    /// Edges as `(smaller, larger)` pairs in sorted order
    #[must_use]
    pub fn edges(&self) -> &[(Word, Word)] {
        &self.edges
    }

    /// Key value of a node in this graph
    #[must_use]
    pub fn heuristic_of(&self, word: &str) -> Option<u64> {
        self.heuristics.get(word).copied()
    }

    #[must_use]
    pub fn contains_edge(&self, a: &Word, b: &Word) -> bool {
        self.edges.binary_search(&ordered_pair(a, b)).is_ok()
    }

    /// Number of edges touching `word`
    #[must_use]
    pub fn degree(&self, word: &Word) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| a == word || b == word)
            .count()
    }
}
