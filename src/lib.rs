//! Word Ladder
//!
//! Finds every word ladder between two words of equal length, where each step
//! changes exactly one letter and every intermediate word is in the dictionary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_ladder::dictionary::{Dictionary, SliceSource};
//! use word_ladder::solver::{Puzzle, Solver};
//!
//! let dictionary = Dictionary::load(&SliceSource::embedded(), 3).unwrap();
//! let start = dictionary.lookup("cat").unwrap();
//! let end = dictionary.lookup("dog").unwrap();
//!
//! let puzzle = Puzzle::new(dictionary.graph(), start, end).unwrap();
//! let minimum = puzzle.minimum_ladder_length().unwrap();
//!
//! let mut solver = Solver::new(&puzzle);
//! for solution in solver.solve(minimum) {
//!     println!("{solution}");
//! }
//! ```

// Core domain types
pub mod core;

// Limits and defaults
pub mod config;

// Word sources and per-length dictionaries
pub mod dictionary;

// Ladder search
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
