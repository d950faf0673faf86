//! Word ladder search
//!
//! Neighbor generation, the frontier key, three best-first searches sharing one
//! engine, pair suggestion and graph export.

pub mod compare;
mod engine;
pub mod frontier;
pub mod graph;
mod heuristic;
mod neighbors;
pub mod strategy;
pub mod suggest;

pub use compare::{AlgorithmRun, compare_algorithms};
pub use engine::{SearchOutcome, SearchPath, best_first_search};
pub use graph::LadderGraph;
pub use heuristic::heuristic;
pub use neighbors::neighbors;
pub use strategy::{AStar, Algorithm, GreedyBestFirst, RevisitPolicy, SearchStrategy, UniformCost};
pub use suggest::{layer_at_distance, suggest_pair};
