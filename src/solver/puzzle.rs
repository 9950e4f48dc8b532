//! Puzzle definition and shortest-ladder oracle

use super::distance::DistanceTable;
use crate::core::{AdjacencyGraph, Word, WordId};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Error type for puzzle construction
///
/// `NotFound`, `Island` and `IdenticalEndpoints` describe bad user input.
/// `NotInGraph` and `LengthMismatch` mean the caller mixed words and graphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Word '{0}' does not exist")]
    NotFound(String),
    #[error("Word '{0}' is an island word (no single-letter change forms another word)")]
    Island(Word),
    #[error("Start and end are both '{0}'")]
    IdenticalEndpoints(Word),
    #[error("Word '{0}' does not belong to the puzzle's graph")]
    NotInGraph(Word),
    #[error("Word '{word}' has {found} letters but the graph holds {expected}-letter words")]
    LengthMismatch {
        word: Word,
        expected: usize,
        found: usize,
    },
}

impl PuzzleError {
    /// True for programming faults rather than rejected input
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::NotInGraph(_) | Self::LengthMismatch { .. })
    }
}

/// Construction options for a puzzle
#[derive(Debug, Clone, Copy)]
pub struct PuzzleOptions {
    /// Accept start == end as a solved one-word ladder
    pub allow_identical_endpoints: bool,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self {
            allow_identical_endpoints: true,
        }
    }
}

/// A start/end pair bound to one graph
///
/// The distance table is computed on first use and cached for the puzzle's lifetime.
#[derive(Debug)]
pub struct Puzzle<'g> {
    graph: &'g AdjacencyGraph,
    start: WordId,
    end: WordId,
    distances: OnceLock<DistanceTable>,
}

impl<'g> Puzzle<'g> {
    /// Create a puzzle from two words of the graph
    ///
    /// # Errors
    /// Returns `PuzzleError` if either word has the wrong length, is not part of
    /// `graph`, or is an island.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{AdjacencyGraph, Word};
    /// use word_ladder::solver::Puzzle;
    ///
    /// let graph = AdjacencyGraph::build(["cat", "cot", "cog", "dog"]).unwrap();
    /// let start = Word::new("cat").unwrap();
    /// let end = Word::new("dog").unwrap();
    ///
    /// let puzzle = Puzzle::new(&graph, &start, &end).unwrap();
    /// assert_eq!(puzzle.minimum_ladder_length(), Some(4));
    /// ```
    pub fn new(graph: &'g AdjacencyGraph, start: &Word, end: &Word) -> Result<Self, PuzzleError> {
        Self::with_options(graph, start, end, PuzzleOptions::default())
    }

    /// Create a puzzle with explicit options
    ///
    /// # Errors
    /// As [`Puzzle::new`], plus `IdenticalEndpoints` when disallowed by `options`.
    pub fn with_options(
        graph: &'g AdjacencyGraph,
        start: &Word,
        end: &Word,
        options: PuzzleOptions,
    ) -> Result<Self, PuzzleError> {
        let start = resolve(graph, start)?;
        let end = resolve(graph, end)?;

        if start == end && !options.allow_identical_endpoints {
            return Err(PuzzleError::IdenticalEndpoints(graph.word(start).clone()));
        }

        Ok(Self {
            graph,
            start,
            end,
            distances: OnceLock::new(),
        })
    }

    /// Create a puzzle from raw text, reporting unknown words as `NotFound`
    ///
    /// # Errors
    /// Returns `PuzzleError` if either word is unknown, an island, or disallowed.
    pub fn from_text(
        graph: &'g AdjacencyGraph,
        start: &str,
        end: &str,
        options: PuzzleOptions,
    ) -> Result<Self, PuzzleError> {
        let start_word = graph
            .get(start)
            .ok_or_else(|| PuzzleError::NotFound(start.to_string()))?;
        let end_word = graph
            .get(end)
            .ok_or_else(|| PuzzleError::NotFound(end.to_string()))?;

        Self::with_options(graph, start_word, end_word, options)
    }

    #[inline]
    #[must_use]
    pub const fn graph(&self) -> &'g AdjacencyGraph {
        self.graph
    }

    #[inline]
    #[must_use]
    pub const fn start_id(&self) -> WordId {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end_id(&self) -> WordId {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &'g Word {
        self.graph.word(self.start)
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> &'g Word {
        self.graph.word(self.end)
    }

    /// Distance table towards the end word, computed on first call
    ///
    /// The search stops as soon as the start word is reached.
    pub fn distances(&self) -> &DistanceTable {
        self.distances
            .get_or_init(|| DistanceTable::compute(self.graph, self.end, Some(self.start)))
    }

    /// Word count of the shortest ladder, or `None` if the words are not connected
    ///
    /// Identical start and end give a one-word ladder.
    #[must_use]
    pub fn minimum_ladder_length(&self) -> Option<usize> {
        let length = self
            .distances()
            .distance(self.start)
            .map(|edges| edges as usize + 1);

        debug!(
            start = %self.start(),
            end = %self.end(),
            ?length,
            "minimum ladder length"
        );
        length
    }
}

fn resolve(graph: &AdjacencyGraph, word: &Word) -> Result<WordId, PuzzleError> {
    if word.len() != graph.word_length() {
        return Err(PuzzleError::LengthMismatch {
            word: word.clone(),
            expected: graph.word_length(),
            found: word.len(),
        });
    }

    let id = graph
        .id_of(word.text())
        .ok_or_else(|| PuzzleError::NotInGraph(word.clone()))?;

    // The graph's copy carries the island flag; a detached word does not
    let owned = graph.word(id);
    if owned.is_island() {
        return Err(PuzzleError::Island(owned.clone()));
    }

    Ok(id)
}
