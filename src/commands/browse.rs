//! Interactive browse mode
//!
//! Prompt-driven loop: pick a start word, an end word and a maximum ladder length,
//! then page through the ladders found.

use super::solve::{SolveConfig, solve_ladder};
use crate::config::{DEFAULT_MAX_LADDER_LENGTH, LADDER_LENGTHS, WORD_LENGTHS};
use crate::dictionary::{Dictionary, DictionaryCache, WordSource};
use crate::output::{Pager, print_ladder_page, print_ladder_summary};
use crate::solver::PuzzleError;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A command typed while browsing solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    New,
    Quit,
}

impl BrowseCommand {
    /// Parse user input, case-insensitively
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" | "next" | "" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "new" | "r" | "restart" => Some(Self::New),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Parse a max ladder length answer
///
/// Blank input picks the default, `min` asks for the minimum length. Values
/// outside the accepted range are rejected.
#[must_use]
pub fn parse_max_length(input: &str) -> Option<Option<usize>> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => Some(Some(DEFAULT_MAX_LADDER_LENGTH)),
        "min" | "shortest" => Some(None),
        _ => input
            .parse::<usize>()
            .ok()
            .filter(|n| LADDER_LENGTHS.contains(n))
            .map(Some),
    }
}

/// Whether an answer to the start-word prompt ends the session
///
/// A quit command that is also a word of the loaded dictionary is taken as
/// the start word.
fn ends_session(input: &str, dictionary: Option<&Dictionary>) -> bool {
    matches!(BrowseCommand::parse(input), Some(BrowseCommand::Quit))
        && !dictionary.is_some_and(|d| d.get(input).is_some())
}

/// Run the interactive browse mode
///
/// # Errors
///
/// Returns an error if reading user input fails or a puzzle is built from words
/// that do not belong to its dictionary.
pub fn run_browse<S: WordSource>(cache: &mut DictionaryCache<S>, page_size: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Ladder - Browse Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Generate a word ladder from a starting word to an ending word");
    println!("by changing one letter at a time.\n");
    println!("Commands while browsing: 'next', 'prev', 'new', 'quit'\n");

    loop {
        let start = get_user_input("Start word (or 'q' to quit)")?;
        let length = start.chars().count();
        let loaded = WORD_LENGTHS
            .contains(&length)
            .then(|| cache.get_or_load(length));

        let known = loaded.as_ref().and_then(|r| r.as_deref().ok());
        if ends_session(&start, known) {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let Some(loaded) = loaded else {
            println!(
                "{}\n",
                format!(
                    "⚠️ Please enter a start word between {} and {} letters.",
                    WORD_LENGTHS.start(),
                    WORD_LENGTHS.end()
                )
                .red()
            );
            continue;
        };

        let dictionary = match loaded {
            Ok(dictionary) => dictionary,
            Err(e) => {
                println!("{}\n", format!("⚠️ {e}").red());
                continue;
            }
        };

        let end = get_user_input("End word")?;

        let max_length = loop {
            let input = get_user_input(&format!(
                "Max ladder length ({}-{}, 'min' for shortest, blank for {DEFAULT_MAX_LADDER_LENGTH})",
                LADDER_LENGTHS.start(),
                LADDER_LENGTHS.end()
            ))?;
            if let Some(max_length) = parse_max_length(&input) {
                break max_length;
            }
            println!("❌ Invalid length!\n");
        };

        let mut config = SolveConfig::new(start, end);
        config.max_length = max_length;

        let report = match solve_ladder(&config, &dictionary) {
            Ok(report) => report,
            Err(e) if e.is_invariant_violation() => return Err(e.into()),
            Err(PuzzleError::NotFound(word)) => {
                println!("{}\n", format!("⚠️ Word '{word}' does not exist!").red());
                continue;
            }
            Err(e) => {
                println!("{}\n", format!("⚠️ {e}").red());
                continue;
            }
        };

        print_ladder_summary(&report);
        if report.solutions.is_empty() {
            continue;
        }

        let mut pager = Pager::new(report.solutions.len(), page_size);
        print_ladder_page(&report.solutions, &pager);

        loop {
            let input = get_user_input("Command (next/prev/new/quit)")?;
            match BrowseCommand::parse(&input) {
                Some(BrowseCommand::Next) => {
                    if !pager.next_page() {
                        println!("Already on the last page.\n");
                        continue;
                    }
                }
                Some(BrowseCommand::Previous) => {
                    if !pager.previous_page() {
                        println!("Already on the first page.\n");
                        continue;
                    }
                }
                Some(BrowseCommand::New) => {
                    println!("\n🔄 New puzzle!\n");
                    break;
                }
                Some(BrowseCommand::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                None => {
                    println!("❌ Unknown command! Use next, prev, new or quit.\n");
                    continue;
                }
            }
            print_ladder_page(&report.solutions, &pager);
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SliceSource;

    #[test]
    fn parse_browse_commands() {
        assert_eq!(BrowseCommand::parse("next"), Some(BrowseCommand::Next));
        assert_eq!(BrowseCommand::parse("N"), Some(BrowseCommand::Next));
        assert_eq!(BrowseCommand::parse(""), Some(BrowseCommand::Next));
        assert_eq!(BrowseCommand::parse(" prev "), Some(BrowseCommand::Previous));
        assert_eq!(BrowseCommand::parse("new"), Some(BrowseCommand::New));
        assert_eq!(BrowseCommand::parse("QUIT"), Some(BrowseCommand::Quit));
        assert_eq!(BrowseCommand::parse("jump"), None);
    }

    #[test]
    fn quit_words_in_the_dictionary_are_start_words() {
        let source = SliceSource::new(&["quit", "quip", "suit", "exit", "edit"]);
        let with_quit = Dictionary::load(&source, 4).unwrap();
        let source = SliceSource::new(&["cold", "cord"]);
        let without_quit = Dictionary::load(&source, 4).unwrap();

        assert!(!ends_session("quit", Some(&with_quit)));
        assert!(!ends_session("EXIT", Some(&with_quit)));
        assert!(ends_session("quit", Some(&without_quit)));
        assert!(ends_session("exit", None));
        assert!(ends_session("q", None));
        assert!(!ends_session("cold", Some(&without_quit)));
        assert!(!ends_session("", None));
    }

    #[test]
    fn parse_max_length_defaults_and_bounds() {
        assert_eq!(parse_max_length(""), Some(Some(DEFAULT_MAX_LADDER_LENGTH)));
        assert_eq!(parse_max_length("min"), Some(None));
        assert_eq!(parse_max_length("4"), Some(Some(4)));
        assert_eq!(parse_max_length("0"), None);
        assert_eq!(parse_max_length("11"), None);
        assert_eq!(parse_max_length("four"), None);
    }
}
