//! Benchmark command
//!
//! Solves many random puzzles in parallel against one shared graph.

use crate::core::{AdjacencyGraph, Word, WordId};
use crate::dictionary::Dictionary;
use crate::solver::{Puzzle, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub puzzles: usize,
    /// Bound for every puzzle; `None` solves each at its own minimum length
    pub max_length: Option<usize>,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(puzzles: usize) -> Self {
        Self {
            puzzles,
            max_length: None,
            seed: 42,
            show_progress: false,
        }
    }
}

/// Outcome of one benchmark puzzle
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    pub start: String,
    pub end: String,
    pub minimum_length: Option<usize>,
    pub solutions: usize,
    pub explored: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub runs: Vec<PuzzleRun>,
    pub unreachable: usize,
    pub total_solutions: usize,
    pub total_explored: usize,
    pub average_minimum: f64,
    /// Minimum ladder length → number of puzzles
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Pick random start/end pairs among the non-island words
///
/// The same seed always yields the same pairs.
#[must_use]
pub fn random_pairs(graph: &AdjacencyGraph, count: usize, seed: u64) -> Vec<(WordId, WordId)> {
    let candidates: Vec<WordId> = (0..graph.len())
        .filter(|&id| !graph.word(id).is_island())
        .collect();

    if candidates.is_empty() {
        warn!(length = graph.word_length(), "no non-island words to benchmark");
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| {
            let start = *candidates.choose(&mut rng)?;
            let end = *candidates.choose(&mut rng)?;
            Some((start, end))
        })
        .collect()
}

/// Run the benchmark on a dictionary
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let shared = dictionary.shared_graph();
    let graph: &AdjacencyGraph = &shared;
    let pairs = random_pairs(graph, config.puzzles, config.seed);

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let timer = Instant::now();

    let runs: Vec<PuzzleRun> = pairs
        .par_iter()
        .map(|&(start, end)| {
            let run = solve_pair(graph, graph.word(start), graph.word(end), config.max_length);
            pb.inc(1);
            run
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = timer.elapsed();

    let unreachable = runs.iter().filter(|r| r.minimum_length.is_none()).count();
    let reachable = runs.len() - unreachable;

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for length in runs.iter().filter_map(|r| r.minimum_length) {
        *distribution.entry(length).or_insert(0) += 1;
    }

    let average_minimum = if reachable > 0 {
        runs.iter().filter_map(|r| r.minimum_length).sum::<usize>() as f64 / reachable as f64
    } else {
        0.0
    };

    let total_solutions = runs.iter().map(|r| r.solutions).sum();
    let total_explored = runs.iter().map(|r| r.explored).sum();

    info!(
        puzzles = runs.len(),
        unreachable,
        total_solutions,
        total_explored,
        "benchmark finished"
    );

    BenchmarkResult {
        puzzles_per_second: if duration.is_zero() {
            0.0
        } else {
            runs.len() as f64 / duration.as_secs_f64()
        },
        runs,
        unreachable,
        total_solutions,
        total_explored,
        average_minimum,
        distribution,
        duration,
    }
}

fn solve_pair(graph: &AdjacencyGraph, start: &Word, end: &Word, max_length: Option<usize>) -> PuzzleRun {
    let mut run = PuzzleRun {
        start: start.text().to_string(),
        end: end.text().to_string(),
        minimum_length: None,
        solutions: 0,
        explored: 0,
    };

    // Pairs are drawn from the graph's own non-island words
    let Ok(puzzle) = Puzzle::new(graph, start, end) else {
        return run;
    };

    run.minimum_length = puzzle.minimum_ladder_length();
    if let Some(bound) = max_length.or(run.minimum_length) {
        let mut solver = Solver::new(&puzzle);
        run.solutions = solver.solve(bound).len();
        run.explored = solver.explored_count();
    }

    run
}
