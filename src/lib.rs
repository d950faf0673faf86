//! Word Ladder
//!
//! Finds and scores ladders between equal-length words, where each step changes
//! one letter and every rung is a valid dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Word, WordIndex};
//! use word_ladder::solver::Algorithm;
//!
//! let index = WordIndex::from_strs(["cat", "cot", "cog", "dog"]).unwrap();
//! let start = Word::new("cat").unwrap();
//! let target = Word::new("dog").unwrap();
//!
//! let path = Algorithm::AStar.find_path(&index, &start, &target).unwrap();
//! assert_eq!(path.len(), 3);
//! println!("{path}");
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Sessions and scoring
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
