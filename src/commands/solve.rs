//! Ladder solving command
//!
//! Validates a start/end pair, finds the minimum ladder length and enumerates
//! every ladder within the requested bound.

use crate::dictionary::Dictionary;
use crate::solver::{CancellationToken, Puzzle, PuzzleError, PuzzleOptions, Solution, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    /// Longest ladder to enumerate, in words; `None` uses the minimum length
    pub max_length: Option<usize>,
    /// Stop enumerating after this long and keep what was found
    pub timeout: Option<Duration>,
    pub options: PuzzleOptions,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            max_length: None,
            timeout: None,
            options: PuzzleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Result of solving a ladder
pub struct LadderReport {
    pub start: String,
    pub end: String,
    /// Word count of the shortest ladder, `None` if unreachable
    pub minimum_length: Option<usize>,
    /// Bound the enumeration ran with, `None` if it never ran
    pub max_length: Option<usize>,
    pub solutions: Vec<Solution>,
    pub explored: usize,
    pub cancelled: bool,
    /// Time the dictionary took to build, zero for a prebuilt graph
    pub load_time: Duration,
    pub distance_time: Duration,
    pub solve_time: Duration,
}

impl LadderReport {
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        self.minimum_length.is_none()
    }
}

/// Solve a ladder against a dictionary
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not in the dictionary or is an island word
/// - Start and end are identical and `options` disallows it
pub fn solve_ladder(config: &SolveConfig, dictionary: &Dictionary) -> Result<LadderReport, PuzzleError> {
    let puzzle = Puzzle::from_text(dictionary.graph(), &config.start, &config.end, config.options)?;

    let distance_start = Instant::now();
    let minimum_length = puzzle.minimum_ladder_length();
    let distance_time = distance_start.elapsed();

    let mut report = LadderReport {
        start: puzzle.start().text().to_string(),
        end: puzzle.end().text().to_string(),
        minimum_length,
        max_length: None,
        solutions: Vec::new(),
        explored: 0,
        cancelled: false,
        load_time: dictionary.load_time(),
        distance_time,
        solve_time: Duration::ZERO,
    };

    let Some(max_length) = config.max_length.or(minimum_length) else {
        info!(start = %report.start, end = %report.end, "no ladder exists");
        return Ok(report);
    };

    let mut solver = Solver::new(&puzzle);
    if let Some(timeout) = config.timeout {
        solver = solver.with_cancellation(CancellationToken::with_timeout(timeout));
    }

    let solve_start = Instant::now();
    report.solutions = solver.solve(max_length);
    report.solve_time = solve_start.elapsed();
    report.max_length = Some(max_length);
    report.explored = solver.explored_count();
    report.cancelled = solver.was_cancelled();

    info!(
        start = %report.start,
        end = %report.end,
        max_length,
        solutions = report.solutions.len(),
        explored = report.explored,
        "solved ladder"
    );

    Ok(report)
}

/// Only compute the minimum ladder length
///
/// # Errors
///
/// Returns an error if either word is unknown or an island word.
pub fn shortest_ladder(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
) -> Result<(Option<usize>, Duration), PuzzleError> {
    let puzzle = Puzzle::from_text(dictionary.graph(), start, end, PuzzleOptions::default())?;

    let timer = Instant::now();
    let length = puzzle.minimum_ladder_length();
    Ok((length, timer.elapsed()))
}
