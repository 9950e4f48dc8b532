//! Display functions for command results

use super::formatters::{create_progress_bar, highlight_ladder, millis};
use super::pager::Pager;
use crate::commands::{AnalysisResult, BenchmarkResult, LadderReport};
use crate::dictionary::Dictionary;
use crate::solver::Solution;
use colored::Colorize;
use std::time::Duration;

/// Print the timing and count lines of a solve
pub fn print_ladder_summary(report: &LadderReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} ➔ {}",
        report.start.bright_yellow().bold(),
        report.end.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("Took {} to load dictionary.", millis(report.load_time).green());
    match report.minimum_length {
        Some(minimum) => println!(
            "Took {} to determine minimum ladder length of {}.",
            millis(report.distance_time).green(),
            minimum.to_string().green()
        ),
        None => {
            println!(
                "{}",
                format!(
                    "Cannot solve '{}' to '{}' (took {} to determine that).",
                    report.start,
                    report.end,
                    millis(report.distance_time)
                )
                .red()
            );
            return;
        }
    }

    if report.solutions.is_empty() {
        println!(
            "{}",
            format!(
                "Took {} to find no solutions within {} words (explored {}).",
                millis(report.solve_time),
                report.max_length.unwrap_or_default(),
                report.explored
            )
            .red()
        );
    } else {
        println!(
            "Took {} to find {} solutions within {} words (explored {}).",
            millis(report.solve_time).green(),
            report.solutions.len().to_string().green(),
            report.max_length.unwrap_or_default(),
            report.explored.to_string().green()
        );
    }

    if report.cancelled {
        println!(
            "{}",
            "⚠️ Search was cancelled; solutions shown are partial.".yellow()
        );
    }
}

/// Print one page of solutions
pub fn print_ladder_page(solutions: &[Solution], pager: &Pager) {
    println!();
    let offset = pager.range().start;
    for (i, solution) in pager.page(solutions).iter().enumerate() {
        println!(
            "  {}. {}",
            (offset + i + 1).to_string().bright_black(),
            highlight_ladder(solution)
        );
    }
    println!(
        "\n  Page {} of {} ({} solutions)\n",
        pager.page_number(),
        pager.page_count(),
        pager.total()
    );
}

/// Print a solve result with one page of solutions
pub fn print_ladder_report(report: &LadderReport, pager: &Pager) {
    print_ladder_summary(report);
    if !report.solutions.is_empty() {
        print_ladder_page(&report.solutions, pager);
    }
}

/// Print the minimum ladder length only
pub fn print_shortest(start: &str, end: &str, length: Option<usize>, took: Duration) {
    match length {
        Some(length) => println!(
            "Minimum ladder length from {} to {}: {} (took {})",
            start.to_uppercase().bright_yellow(),
            end.to_uppercase().bright_yellow(),
            length.to_string().green().bold(),
            millis(took)
        ),
        None => println!(
            "{}",
            format!(
                "No ladder from {} to {} (took {})",
                start.to_uppercase(),
                end.to_uppercase(),
                millis(took)
            )
            .red()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.is_island {
        println!(
            "\n{}",
            "🏝️  Island word: no single-letter change forms another word.".yellow()
        );
    } else {
        println!("\n🔗 {} neighbours:", result.neighbors.len());
        println!("   {}", result.neighbors.join(", "));
    }

    let bar = create_progress_bar(
        result.component_size as f64,
        result.dictionary_size as f64,
        30,
    );
    println!(
        "\n📊 Reachable:   [{}] {} of {} words",
        bar.green(),
        result.component_size.to_string().bright_yellow(),
        result.dictionary_size
    );
    println!("   Farthest:    {} steps away", result.eccentricity);
}

/// Print dictionary statistics
pub fn print_dictionary_summary(dictionary: &Dictionary) {
    let graph = dictionary.graph();
    println!(
        "Dictionary: {} words of length {}, {} links, {} islands (loaded in {})",
        graph.len().to_string().bright_yellow(),
        graph.word_length(),
        graph.edge_count(),
        graph.island_count(),
        millis(dictionary.load_time())
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.runs.len());
    println!(
        "   Unreachable:      {}",
        result.unreachable.to_string().yellow()
    );
    println!(
        "   Average minimum:  {}",
        format!("{:.2}", result.average_minimum)
            .bright_yellow()
            .bold()
    );
    println!("   Solutions found:  {}", result.total_solutions);
    println!("   Words explored:   {}", result.total_explored);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.runs.is_empty() {
        return;
    }

    println!("\n📈 {}", "Minimum ladder lengths:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();
    for (length, &count) in lengths {
        let pct = (count as f64 / result.runs.len() as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
