//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod pager;

pub use display::{
    print_analysis_result, print_benchmark_result, print_dictionary_summary, print_ladder_page,
    print_ladder_report, print_ladder_summary, print_shortest,
};
pub use pager::Pager;
