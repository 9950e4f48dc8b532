//! Build script to embed the dictionary
//!
//! Reads `data/words.txt` and generates a sorted, deduplicated const slice of
//! uppercase words of every length.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    // Lines starting with '#' are comments
    let words: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            assert!(
                line.bytes().all(|b| b.is_ascii_alphabetic()),
                "{WORD_LIST}: '{line}' is not a word"
            );
            line.to_ascii_uppercase()
        })
        .collect();

    let mut source = String::new();
    writeln!(source, "// Generated from {WORD_LIST}").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Embedded dictionary words of mixed lengths, uppercase and sorted").unwrap();
    writeln!(source, "pub const EMBEDDED: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap();
    }
    writeln!(source, "];").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Number of words in EMBEDDED").unwrap();
    writeln!(source, "pub const EMBEDDED_COUNT: usize = {};", words.len()).unwrap();

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}
