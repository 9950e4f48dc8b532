//! Formatting utilities for terminal output

use crate::core::Word;
use crate::solver::Solution;
use colored::Colorize;

/// Separator placed between ladder words
pub const LADDER_ARROW: &str = " ➔ ";

/// Render `word` with the letter at `changed` in bold green
#[must_use]
pub fn highlight_change(word: &Word, changed: Option<usize>) -> String {
    (0..word.len())
        .map(|i| {
            let letter = char::from(word.letter_at(i)).to_string();
            if Some(i) == changed {
                letter.green().bold().to_string()
            } else {
                letter
            }
        })
        .collect()
}

/// Render a full ladder, highlighting the letter changed at each step
#[must_use]
pub fn highlight_ladder(solution: &Solution) -> String {
    let changes = std::iter::once(None).chain(solution.changes().map(Some));

    solution
        .ladder()
        .iter()
        .zip(changes)
        .map(|(word, changed)| highlight_change(word, changed))
        .collect::<Vec<_>>()
        .join(LADDER_ARROW)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration in milliseconds with two decimals
#[must_use]
pub fn millis(duration: std::time::Duration) -> String {
    format!("{:.2}ms", duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AdjacencyGraph;
    use crate::solver::{Puzzle, PuzzleOptions, Solver};
    use std::time::Duration;

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\x1b') => in_escape = true,
                (true, 'm') => in_escape = false,
                (false, _) => plain.push(c),
                _ => {}
            }
        }
        plain
    }

    #[test]
    fn highlight_change_keeps_letters() {
        let cot = Word::new("cot").unwrap();

        assert_eq!(strip_ansi(&highlight_change(&cot, Some(1))), "COT");
    }

    #[test]
    fn highlight_change_without_position_is_plain() {
        let cat = Word::new("cat").unwrap();

        assert_eq!(highlight_change(&cat, None), "CAT");
    }

    #[test]
    fn highlight_ladder_joins_with_arrows() {
        let graph = AdjacencyGraph::build(["cat", "cot", "cog", "dog"]).unwrap();
        let puzzle = Puzzle::from_text(&graph, "cat", "dog", PuzzleOptions::default()).unwrap();
        let solutions = Solver::new(&puzzle).solve(4);

        let rendered = highlight_ladder(&solutions[0]);

        assert_eq!(strip_ansi(&rendered), "CAT ➔ COT ➔ COG ➔ DOG");
        assert!(rendered.starts_with("CAT ➔ "));
        let expected = [
            highlight_change(&Word::new("cot").unwrap(), Some(1)),
            highlight_change(&Word::new("cog").unwrap(), Some(2)),
            highlight_change(&Word::new("dog").unwrap(), Some(0)),
        ];
        assert!(rendered.ends_with(&expected.join(LADDER_ARROW)));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn millis_format() {
        assert_eq!(millis(Duration::from_micros(1500)), "1.50ms");
    }
}
