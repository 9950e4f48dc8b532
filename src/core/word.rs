//! Word ladder word representation
//!
//! A Word stores one uppercase dictionary entry. Identity is the letter sequence;
//! the island flag is assigned by the graph that owns the word.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Wildcard byte used when building one-letter masks
///
/// Words only ever contain ASCII letters, so this can never collide with a real letter.
pub(crate) const WILDCARD: u8 = b'*';

/// A fixed-length dictionary word
///
/// Equality, ordering and hashing only look at the letters.
#[derive(Debug, Clone)]
pub struct Word {
    letters: Box<str>,
    island: bool,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new detached Word from a string
    ///
    /// The text is normalized to uppercase. A detached word reports
    /// `is_island() == false` until a graph takes ownership of it.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        Ok(Self {
            letters: text.to_ascii_uppercase().into_boxed_str(),
            island: false,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.letters
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.letters.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters.as_bytes()[position]
    }

    /// True iff the owning graph found no one-letter neighbour for this word
    #[inline]
    #[must_use]
    pub const fn is_island(&self) -> bool {
        self.island
    }

    pub(crate) const fn set_island(&mut self, island: bool) {
        self.island = island;
    }

    /// Check whether two words differ in exactly one position
    ///
    /// Words of different lengths are never adjacent.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("cat").unwrap();
    /// assert!(cat.is_adjacent_to(&Word::new("cot").unwrap()));
    /// assert!(!cat.is_adjacent_to(&Word::new("dog").unwrap()));
    /// assert!(!cat.is_adjacent_to(&Word::new("cats").unwrap()));
    /// ```
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .letters()
                .iter()
                .zip(other.letters())
                .filter(|(a, b)| a != b)
                .count()
                == 1
    }

    /// Positions where this word and `other` disagree
    ///
    /// Only compares the common prefix when lengths differ.
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Vec<usize> {
        self.letters()
            .iter()
            .zip(other.letters())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }

    /// The word with the letter at `position` replaced by a wildcard
    ///
    /// Two words of equal length are adjacent iff they share exactly one mask.
    pub(crate) fn mask(&self, position: usize) -> Box<[u8]> {
        let mut masked: Box<[u8]> = self.letters().into();
        masked[position] = WILDCARD;
        masked
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letters.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letters.cmp(&other.letters)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}
