//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_best_result, print_rank_result, print_score_result,
};
pub use formatters::spinner;
