//! Core domain types for word ladders
//!
//! Words and the adjacency graph that owns them. Everything here is pure compute
//! and read-only once built.

mod graph;
mod word;

pub use graph::{AdjacencyGraph, GraphError, WordId};
pub use word::{Word, WordError};
