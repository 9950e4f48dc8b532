//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod browse;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, PuzzleRun, run_benchmark};
pub use browse::run_browse;
pub use solve::{LadderReport, SolveConfig, shortest_ladder, solve_ladder};
