//! Word analysis command
//!
//! Reports a word's neighbours, island status and the size of its connected component.

use crate::dictionary::{Dictionary, LookupError};
use crate::solver::DistanceTable;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub neighbors: Vec<String>,
    pub is_island: bool,
    /// Words reachable from this one, itself included
    pub component_size: usize,
    /// Greatest distance from this word to any reachable word, in edges
    pub eccentricity: u32,
    pub dictionary_size: usize,
}

/// Analyze a word's place in the adjacency graph
///
/// Island words are analyzed too; only unknown words are rejected.
///
/// # Errors
///
/// Returns `LookupError::NotFound` if the word is not in the dictionary.
pub fn analyze_word(text: &str, dictionary: &Dictionary) -> Result<AnalysisResult, LookupError> {
    let graph = dictionary.graph();
    let id = graph
        .id_of(text)
        .ok_or_else(|| LookupError::NotFound(text.to_string()))?;

    let table = DistanceTable::compute(graph, id, None);
    let eccentricity = (0..graph.len())
        .filter_map(|other| table.distance(other))
        .max()
        .unwrap_or_default();

    let word = graph.word(id);
    Ok(AnalysisResult {
        word: word.text().to_string(),
        neighbors: graph
            .neighbors(id)
            .iter()
            .map(|&n| graph.word(n).text().to_string())
            .collect(),
        is_island: word.is_island(),
        component_size: table.reached(),
        eccentricity,
        dictionary_size: graph.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SliceSource;

    fn scenario() -> Dictionary {
        let source = SliceSource::new(&["cat", "cot", "cog", "dog", "dot", "cag", "elf", "elk", "emu"]);
        Dictionary::load(&source, 3).unwrap()
    }

    #[test]
    fn analyze_connected_word() {
        let dictionary = scenario();
        let result = analyze_word("cot", &dictionary).unwrap();

        assert_eq!(result.word, "COT");
        assert_eq!(result.neighbors, vec!["CAT", "COG", "DOT"]);
        assert!(!result.is_island);
        assert_eq!(result.component_size, 6);
        assert_eq!(result.eccentricity, 2);
        assert_eq!(result.dictionary_size, 9);
    }

    #[test]
    fn analyze_island_word() {
        let dictionary = scenario();
        let result = analyze_word("emu", &dictionary).unwrap();

        assert!(result.is_island);
        assert!(result.neighbors.is_empty());
        assert_eq!(result.component_size, 1);
        assert_eq!(result.eccentricity, 0);
    }

    #[test]
    fn analyze_unknown_word() {
        let dictionary = scenario();

        assert_eq!(
            analyze_word("zzz", &dictionary).err(),
            Some(LookupError::NotFound("zzz".to_string()))
        );
    }
}
