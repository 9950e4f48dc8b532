//! Dictionaries of same-length words
//!
//! A `Dictionary` wraps the adjacency graph for one word length and answers
//! lookups. `DictionaryCache` keeps one dictionary per length so each graph is
//! built at most once.

mod embedded;
pub mod source;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use source::{FileSource, SliceSource, SourceError, WordSource};

use crate::config::WORD_LENGTHS;
use crate::core::{AdjacencyGraph, GraphError, Word};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error(
        "Word length {0} is not supported (expected {min} to {max})",
        min = WORD_LENGTHS.start(),
        max = WORD_LENGTHS.end()
    )]
    UnsupportedLength(usize),
    #[error("No words of length {0} in the word list")]
    NoWords(usize),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Rejected word during lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Word '{0}' does not exist")]
    NotFound(String),
    #[error("Word '{0}' is an island word (no single-letter change forms another word)")]
    Island(Word),
}

/// All words of one length together with their adjacency graph
#[derive(Debug, Clone)]
pub struct Dictionary {
    graph: Arc<AdjacencyGraph>,
    load_time: Duration,
}

impl Dictionary {
    /// Load the words of `length` from a source and build their graph
    ///
    /// # Errors
    /// Returns `DictionaryError` if the length is outside the supported range,
    /// the source fails or yields no words, or the graph cannot be built.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::{Dictionary, SliceSource};
    ///
    /// let dictionary = Dictionary::load(&SliceSource::embedded(), 3).unwrap();
    /// assert!(dictionary.get("cat").is_some());
    /// ```
    pub fn load<S: WordSource + ?Sized>(source: &S, length: usize) -> Result<Self, DictionaryError> {
        if !WORD_LENGTHS.contains(&length) {
            return Err(DictionaryError::UnsupportedLength(length));
        }

        let timer = Instant::now();
        let words = source.words_of_length(length)?;
        if words.is_empty() {
            return Err(DictionaryError::NoWords(length));
        }

        let graph = AdjacencyGraph::build(&words)?;
        let load_time = timer.elapsed();
        info!(length, words = graph.len(), ?load_time, "loaded dictionary");

        Ok(Self {
            graph: Arc::new(graph),
            load_time,
        })
    }

    /// Wrap an already built graph; its load time is zero
    #[must_use]
    pub fn from_graph(graph: AdjacencyGraph) -> Self {
        Self {
            graph: Arc::new(graph),
            load_time: Duration::ZERO,
        }
    }

    /// Time spent reading the source and building the graph
    #[inline]
    #[must_use]
    pub const fn load_time(&self) -> Duration {
        self.load_time
    }

    /// Look up a word, case-insensitively
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.graph.get(text)
    }

    /// Look up a word that can take part in a ladder
    ///
    /// # Errors
    /// Returns `LookupError::NotFound` for unknown words and
    /// `LookupError::Island` for words without neighbours.
    pub fn lookup(&self, text: &str) -> Result<&Word, LookupError> {
        let word = self
            .get(text)
            .ok_or_else(|| LookupError::NotFound(text.to_string()))?;

        if word.is_island() {
            return Err(LookupError::Island(word.clone()));
        }

        Ok(word)
    }

    #[inline]
    #[must_use]
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Shared handle to the graph, for solving on other threads
    #[must_use]
    pub fn shared_graph(&self) -> Arc<AdjacencyGraph> {
        Arc::clone(&self.graph)
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.graph.word_length()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    #[must_use]
    pub fn island_count(&self) -> usize {
        self.graph.island_count()
    }
}

/// Dictionaries keyed by word length, each built on first use
pub struct DictionaryCache<S> {
    source: S,
    dictionaries: FxHashMap<usize, Arc<Dictionary>>,
}

impl<S: WordSource> DictionaryCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            dictionaries: FxHashMap::default(),
        }
    }

    /// Dictionary for `length`, loading it if this is the first request
    ///
    /// # Errors
    /// Returns `DictionaryError` if the dictionary has to be loaded and loading fails.
    /// Failed loads are not cached.
    pub fn get_or_load(&mut self, length: usize) -> Result<Arc<Dictionary>, DictionaryError> {
        if let Some(dictionary) = self.dictionaries.get(&length) {
            debug!(length, "dictionary cache hit");
            return Ok(Arc::clone(dictionary));
        }

        let dictionary = Arc::new(Dictionary::load(&self.source, length)?);
        self.dictionaries.insert(length, Arc::clone(&dictionary));
        Ok(dictionary)
    }

    /// Number of lengths loaded so far
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.dictionaries.len()
    }
}
