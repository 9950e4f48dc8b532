//! One-letter adjacency graph
//!
//! Nodes are the words of a single length; edges join words that differ in exactly
//! one position. Construction groups words by one-wildcard masks so that only words
//! sharing a bucket are ever paired, giving O(n·L) work instead of O(n²·L).

use super::word::{Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Index of a word inside its graph
///
/// Ids follow lexicographic order of the words, so sorting ids sorts words.
pub type WordId = usize;

/// Error type for graph construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Cannot build a graph from an empty word list")]
    Empty,
    #[error("Word '{word}' has {found} letters, expected {expected}")]
    MixedLength {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Immutable adjacency graph for words of one length
#[derive(Debug)]
pub struct AdjacencyGraph {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashMap<Box<str>, WordId>,
    neighbors: Vec<Vec<WordId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Build the graph from same-length words
    ///
    /// Case is normalized and duplicates collapse into a single word.
    ///
    /// # Errors
    /// Returns `GraphError` if the input is empty, contains an invalid word,
    /// or mixes word lengths.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::build(["cat", "cot", "dog"]).unwrap();
    /// assert_eq!(graph.len(), 3);
    /// assert!(graph.get("dog").unwrap().is_island());
    /// assert!(AdjacencyGraph::build(["cat", "cats"]).is_err());
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<Word> = Vec::new();
        let mut word_length = None;

        for text in words {
            let word = Word::new(text.as_ref())?;
            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(GraphError::MixedLength {
                    word: word.text().to_string(),
                    expected,
                    found: word.len(),
                });
            }
            parsed.push(word);
        }

        let word_length = word_length.ok_or(GraphError::Empty)?;

        parsed.sort();
        parsed.dedup();

        let index: FxHashMap<Box<str>, WordId> = parsed
            .iter()
            .enumerate()
            .map(|(id, word)| (word.text().into(), id))
            .collect();

        let (neighbors, edge_count) = link_neighbors(&parsed, word_length);

        for (word, adjacent) in parsed.iter_mut().zip(&neighbors) {
            word.set_island(adjacent.is_empty());
        }

        let graph = Self {
            word_length,
            words: parsed,
            index,
            neighbors,
            edge_count,
        };

        debug!(
            word_length,
            words = graph.len(),
            edges = graph.edge_count,
            islands = graph.island_count(),
            "built adjacency graph"
        );

        Ok(graph)
    }

    /// Length shared by every word in the graph
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the graph holds no words (never the case for a built graph)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of undirected edges
    #[inline]
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All words in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word for an id
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Look up the id of a word, case-insensitively
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        if text.bytes().any(|b| b.is_ascii_lowercase()) {
            self.index.get(text.to_ascii_uppercase().as_str()).copied()
        } else {
            self.index.get(text).copied()
        }
    }

    /// Look up a word, case-insensitively
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.id_of(text).map(|id| &self.words[id])
    }

    /// Check whether the graph owns a word with these letters
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    /// Neighbour ids of a word, in lexicographic order
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: WordId) -> &[WordId] {
        &self.neighbors[id]
    }

    /// Number of neighbours of a word
    #[inline]
    #[must_use]
    pub fn degree(&self, id: WordId) -> usize {
        self.neighbors[id].len()
    }

    /// Check whether two graph words are joined by an edge
    #[must_use]
    pub fn are_adjacent(&self, a: WordId, b: WordId) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    /// Words with no neighbours
    pub fn islands(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.is_island())
    }

    /// Number of words with no neighbours
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.islands().count()
    }
}

/// Build sorted neighbour lists from one-wildcard mask buckets
///
/// Words of equal length share exactly one mask iff they differ in exactly one
/// position, so every bucket pair is a distinct edge.
fn link_neighbors(words: &[Word], word_length: usize) -> (Vec<Vec<WordId>>, usize) {
    let mut buckets: FxHashMap<Box<[u8]>, Vec<WordId>> = FxHashMap::default();
    for (id, word) in words.iter().enumerate() {
        for position in 0..word_length {
            buckets.entry(word.mask(position)).or_default().push(id);
        }
    }

    let mut neighbors: Vec<Vec<WordId>> = vec![Vec::new(); words.len()];
    let mut edge_count = 0;

    for bucket in buckets.values().filter(|b| b.len() > 1) {
        for (i, &a) in bucket.iter().enumerate() {
            for &b in &bucket[i + 1..] {
                neighbors[a].push(b);
                neighbors[b].push(a);
                edge_count += 1;
            }
        }
    }

    for adjacent in &mut neighbors {
        adjacent.sort_unstable();
    }

    (neighbors, edge_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EMBEDDED;

    fn scenario_graph() -> AdjacencyGraph {
        AdjacencyGraph::build(["CAT", "COT", "COG", "DOG", "DOT", "CAG"]).unwrap()
    }

    fn neighbor_texts<'g>(graph: &'g AdjacencyGraph, text: &str) -> Vec<&'g str> {
        let id = graph.id_of(text).unwrap();
        graph
            .neighbors(id)
            .iter()
            .map(|&n| graph.word(n).text())
            .collect()
    }

    #[test]
    fn build_links_one_letter_neighbours() {
        let graph = scenario_graph();

        assert_eq!(graph.word_length(), 3);
        assert_eq!(graph.len(), 6);
        assert_eq!(neighbor_texts(&graph, "CAT"), vec!["CAG", "COT"]);
        assert_eq!(neighbor_texts(&graph, "COT"), vec!["CAT", "COG", "DOT"]);
        assert_eq!(neighbor_texts(&graph, "DOG"), vec!["COG", "DOT"]);
    }

    #[test]
    fn edge_count_matches_neighbour_lists() {
        let graph = scenario_graph();
        let degree_sum: usize = (0..graph.len()).map(|id| graph.degree(id)).sum();

        // CAT-COT CAT-CAG COT-COG COT-DOT COG-DOG COG-CAG DOG-DOT
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(degree_sum, 2 * graph.edge_count());
    }

    #[test]
    fn words_are_sorted_and_deduplicated() {
        let graph = AdjacencyGraph::build(["dog", "CAT", "cat", "Dog", "cot"]).unwrap();
        let texts: Vec<&str> = graph.words().iter().map(Word::text).collect();

        assert_eq!(texts, vec!["CAT", "COT", "DOG"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let graph = scenario_graph();

        assert_eq!(graph.get("cat").map(Word::text), Some("CAT"));
        assert_eq!(graph.get("CaT").map(Word::text), Some("CAT"));
        assert!(graph.get("cab").is_none());
        assert!(graph.get("cats").is_none());
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        let result = AdjacencyGraph::build(["cat", "cot", "coat"]);

        assert_eq!(
            result.unwrap_err(),
            GraphError::MixedLength {
                word: "COAT".to_string(),
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let words: [&str; 0] = [];
        assert_eq!(AdjacencyGraph::build(words).unwrap_err(), GraphError::Empty);
    }

    #[test]
    fn invalid_word_is_rejected() {
        let result = AdjacencyGraph::build(["cat", "c4t"]);
        assert!(matches!(result, Err(GraphError::InvalidWord(_))));
    }

    #[test]
    fn single_word_is_an_island() {
        let graph = AdjacencyGraph::build(["cat"]).unwrap();

        assert!(graph.get("cat").unwrap().is_island());
        assert_eq!(graph.island_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn island_flag_matches_degree() {
        let graph = AdjacencyGraph::build(["cat", "cot", "elf", "dog", "dot"]).unwrap();

        for (id, word) in graph.words().iter().enumerate() {
            assert_eq!(word.is_island(), graph.degree(id) == 0, "{word}");
        }
        let islands: Vec<&str> = graph.islands().map(Word::text).collect();
        assert_eq!(islands, vec!["ELF"]);
    }

    #[test]
    fn contains_and_are_adjacent() {
        let graph = scenario_graph();
        let cat = graph.id_of("cat").unwrap();
        let cot = graph.id_of("cot").unwrap();
        let dog = graph.id_of("dog").unwrap();

        assert!(graph.contains(&Word::new("cog").unwrap()));
        assert!(!graph.contains(&Word::new("cab").unwrap()));
        assert!(graph.are_adjacent(cat, cot));
        assert!(graph.are_adjacent(cot, cat));
        assert!(!graph.are_adjacent(cat, dog));
    }

    #[test]
    fn adjacency_agrees_with_brute_force() {
        for length in 3..=4 {
            let words: Vec<&str> = EMBEDDED
                .iter()
                .copied()
                .filter(|w| w.len() == length)
                .collect();
            let graph = AdjacencyGraph::build(&words).unwrap();

            for a in 0..graph.len() {
                for b in 0..graph.len() {
                    let expected = graph.word(a).is_adjacent_to(graph.word(b));
                    assert_eq!(
                        graph.are_adjacent(a, b),
                        expected,
                        "{} / {}",
                        graph.word(a),
                        graph.word(b)
                    );
                }
            }
        }
    }

    #[test]
    fn neighbour_lists_are_lexicographic() {
        let words: Vec<&str> = EMBEDDED.iter().copied().filter(|w| w.len() == 4).collect();
        let graph = AdjacencyGraph::build(&words).unwrap();

        for id in 0..graph.len() {
            let texts: Vec<&str> = graph
                .neighbors(id)
                .iter()
                .map(|&n| graph.word(n).text())
                .collect();
            assert!(texts.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
