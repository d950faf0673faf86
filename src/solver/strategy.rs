//! Search strategies
//!
//! Defines the `SearchStrategy` trait and the three frontier orderings.

use super::engine::{SearchOutcome, SearchPath, best_first_search};
use super::heuristic::heuristic;
use crate::core::{Word, WordIndex};
use std::fmt;

/// What to do when a search rediscovers a word it has already queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisitPolicy {
    /// Once a word has been queued it is never queued again
    Never,
    /// Re-queue an unsettled word when a strictly cheaper path reaches it
    IfCheaper,
}

/// A frontier ordering for best-first search over the ladder graph
pub trait SearchStrategy {
    /// Priority of a frontier entry (lower pops first)
    ///
    /// `cost` is the number of edges from the start word to `word`.
    fn priority(&self, cost: usize, word: &Word) -> u64;

    /// How rediscovered words are handled
    fn revisit_policy(&self) -> RevisitPolicy;
}

/// A*: path cost plus the letter-sum key
///
/// The key ignores the target, so the returned path is a reasonable ladder but
/// not necessarily a shortest one.
pub struct AStar;

impl SearchStrategy for AStar {
    fn priority(&self, cost: usize, word: &Word) -> u64 {
        cost as u64 + heuristic(word)
    }

    fn revisit_policy(&self) -> RevisitPolicy {
        RevisitPolicy::IfCheaper
    }
}

/// Greedy best-first: the letter-sum key alone, each word queued at most once
pub struct GreedyBestFirst;

impl SearchStrategy for GreedyBestFirst {
    fn priority(&self, _cost: usize, word: &Word) -> u64 {
        heuristic(word)
    }

    fn revisit_policy(&self) -> RevisitPolicy {
        RevisitPolicy::Never
    }
}

/// Uniform-cost: path cost alone
///
/// With unit edges this expands in breadth-first order and returns a shortest
/// ladder.
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn priority(&self, cost: usize, _word: &Word) -> u64 {
        cost as u64
    }

    fn revisit_policy(&self) -> RevisitPolicy {
        RevisitPolicy::IfCheaper
    }
}

/// Runtime-selectable algorithm with static dispatch to the strategies above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// A* search (cost + letter-sum key)
    #[value(name = "a-star", aliases = ["a_star", "astar"])]
    AStar,
    /// Greedy best-first search (letter-sum key only)
    Greedy,
    /// Uniform-cost search (cost only, shortest path)
    Uniform,
}

impl SearchStrategy for Algorithm {
    fn priority(&self, cost: usize, word: &Word) -> u64 {
        match self {
            Self::AStar => AStar.priority(cost, word),
            Self::Greedy => GreedyBestFirst.priority(cost, word),
            Self::Uniform => UniformCost.priority(cost, word),
        }
    }

    fn revisit_policy(&self) -> RevisitPolicy {
        match self {
            Self::AStar => AStar.revisit_policy(),
            Self::Greedy => GreedyBestFirst.revisit_policy(),
            Self::Uniform => UniformCost.revisit_policy(),
        }
    }
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::AStar, Self::Greedy, Self::Uniform];

    /// Create an algorithm from its name
    ///
    /// Supported names: "a_star" / "a-star" / "astar", "greedy", "uniform".
    /// Defaults to A* if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "greedy" => Self::Greedy,
            "uniform" | "ucs" => Self::Uniform,
            _ => Self::AStar,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "a_star",
            Self::Greedy => "greedy",
            Self::Uniform => "uniform",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Greedy => "Greedy Best-First",
            Self::Uniform => "Uniform Cost",
        }
    }

    /// Run this algorithm and keep the expansion statistics
    #[must_use]
    pub fn search(self, index: &WordIndex, start: &Word, target: &Word) -> SearchOutcome {
        best_first_search(&self, index, start, target)
    }

    /// Run this algorithm and return only the path
    #[must_use]
    pub fn find_path(self, index: &WordIndex, start: &Word, target: &Word) -> Option<SearchPath> {
        self.search(index, start, target).path
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
