//! Word ladder solving
//!
//! `Puzzle` answers the shortest-ladder question with a breadth-first search and
//! keeps the resulting distance table; `Solver` reuses that table to prune an
//! exhaustive depth-first enumeration.

mod cancel;
pub mod distance;
mod engine;
mod puzzle;

pub use cancel::CancellationToken;
pub use distance::DistanceTable;
pub use engine::{Solution, Solver};
pub use puzzle::{Puzzle, PuzzleError, PuzzleOptions};
