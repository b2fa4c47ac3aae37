//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and the verbose trace.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_letters_result, print_round, print_solve_result, trace_round,
    trace_suggestion,
};
