//! Word Ladder - CLI
//!
//! Finds every ladder between two words, one letter change at a time.

use anyhow::{Result, anyhow, ensure};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, run_benchmark, run_browse, shortest_ladder,
        solve_ladder,
    },
    config::{
        DEFAULT_PAGE_SIZE, LADDER_LENGTHS, WORD_LENGTHS, clamp_ladder_length, clamp_page_size,
    },
    dictionary::{Dictionary, DictionaryCache, FileSource, SliceSource, WordSource},
    output::{
        Pager, print_analysis_result, print_benchmark_result, print_dictionary_summary,
        print_ladder_report, print_shortest,
    },
    solver::{PuzzleError, PuzzleOptions},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find every word ladder between two words, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Browse {
        /// Solutions shown per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Find all ladders between two words
    Solve {
        start: String,
        end: String,

        /// Longest ladder to list, in words (default: the minimum length)
        #[arg(short, long)]
        max_length: Option<usize>,

        /// Page of solutions to show
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Solutions shown per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Stop searching after this many milliseconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Treat identical start and end words as an error
        #[arg(long)]
        reject_identical: bool,
    },

    /// Print only the minimum ladder length
    Shortest { start: String, end: String },

    /// Show a word's neighbours and reach
    Word { word: String },

    /// Solve random puzzles in parallel
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length to draw puzzles from
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Longest ladder to list per puzzle (default: each puzzle's minimum)
        #[arg(short, long)]
        max_length: Option<usize>,

        /// Random seed for puzzle selection
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut cache = DictionaryCache::new(word_source(&cli.wordlist));

    // Default to Browse mode if no command given
    let command = cli.command.unwrap_or(Commands::Browse {
        page_size: DEFAULT_PAGE_SIZE,
    });

    match command {
        Commands::Browse { page_size } => run_browse(&mut cache, clamp_page_size(page_size)),
        Commands::Solve {
            start,
            end,
            max_length,
            page,
            page_size,
            timeout,
            reject_identical,
        } => {
            let dictionary = load_for(&mut cache, &start)?;
            let mut config = SolveConfig::new(start, end);
            if let Some(max_length) = max_length {
                ensure!(
                    LADDER_LENGTHS.contains(&max_length),
                    "Max ladder length must be between {} and {}",
                    LADDER_LENGTHS.start(),
                    LADDER_LENGTHS.end()
                );
                config = config.with_max_length(max_length);
            }
            config.timeout = timeout.map(Duration::from_millis);
            config.options = PuzzleOptions {
                allow_identical_endpoints: !reject_identical,
            };
            run_solve_command(&config, &dictionary, page, clamp_page_size(page_size))
        }
        Commands::Shortest { start, end } => {
            let dictionary = load_for(&mut cache, &start)?;
            let (length, took) = shortest_ladder(&start, &end, &dictionary).map_err(fatal)?;
            print_shortest(&start, &end, length, took);
            Ok(())
        }
        Commands::Word { word } => {
            let dictionary = load_for(&mut cache, &word)?;
            let result = analyze_word(&word, &dictionary)?;
            print_dictionary_summary(&dictionary);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            max_length,
            seed,
        } => {
            let dictionary = cache.get_or_load(length)?;
            print_dictionary_summary(&dictionary);
            println!("Running benchmark on {count} random puzzles (seed {seed})...");

            let config = BenchmarkConfig {
                max_length: max_length.map(clamp_ladder_length),
                seed,
                show_progress: true,
                ..BenchmarkConfig::new(count)
            };
            let result = run_benchmark(&dictionary, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    config: &SolveConfig,
    dictionary: &Dictionary,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let report = solve_ladder(config, dictionary).map_err(fatal)?;
    let pager = Pager::new(report.solutions.len(), page_size).at_page(page);
    print_ladder_report(&report, &pager);
    Ok(())
}

/// Load the dictionary whose word length matches `word`
fn load_for<S: WordSource>(
    cache: &mut DictionaryCache<S>,
    word: &str,
) -> Result<Arc<Dictionary>> {
    let length = word.chars().count();
    ensure!(
        WORD_LENGTHS.contains(&length),
        "Words must be between {} and {} letters, '{word}' has {length}",
        WORD_LENGTHS.start(),
        WORD_LENGTHS.end()
    );
    Ok(cache.get_or_load(length)?)
}

/// Invariant faults mean the dictionary and puzzle disagree
fn fatal(error: PuzzleError) -> anyhow::Error {
    if error.is_invariant_violation() {
        anyhow!("internal error: {error}")
    } else {
        error.into()
    }
}

fn word_source(wordlist: &str) -> Box<dyn WordSource> {
    match wordlist {
        "embedded" => Box::new(SliceSource::embedded()),
        path => {
            info!(path, "using word list file");
            Box::new(FileSource::new(path))
        }
    }
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "word_ladder=warn",
        1 => "word_ladder=info",
        _ => "word_ladder=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
