//! Raw word sources
//!
//! A source hands out candidate words for one length. Where the words come from
//! (embedded list, file) is of no concern to the graph builder.

use super::EMBEDDED;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error type for word sources
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Supplier of raw words, keyed by word length
pub trait WordSource {
    /// All candidate words with exactly `length` letters
    ///
    /// # Errors
    /// Returns `SourceError` if the underlying storage cannot be read.
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, SourceError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, SourceError> {
        (**self).words_of_length(length)
    }
}

/// Words held in a string slice, such as the embedded list
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    words: &'a [&'a str],
}

impl<'a> SliceSource<'a> {
    #[must_use]
    pub const fn new(words: &'a [&'a str]) -> Self {
        Self { words }
    }
}

impl SliceSource<'static> {
    /// The word list compiled into the binary
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(EMBEDDED)
    }
}

impl WordSource for SliceSource<'_> {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, SourceError> {
        Ok(filter_length(self.words.iter().copied(), length))
    }
}

/// Newline-separated word list on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn words_of_length(&self, length: usize) -> Result<Vec<String>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(filter_length(content.lines(), length))
    }
}

/// Keep alphabetic entries of the requested length, trimmed
///
/// Blank lines, other lengths and entries with non-letters are skipped.
fn filter_length<'s>(lines: impl Iterator<Item = &'s str>, length: usize) -> Vec<String> {
    let mut skipped = 0usize;

    let words: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let keep = line.len() == length && line.bytes().all(|b| b.is_ascii_alphabetic());
            if !keep {
                skipped += 1;
            }
            keep
        })
        .map(str::to_string)
        .collect();

    debug!(length, kept = words.len(), skipped, "filtered raw word list");
    words
}
