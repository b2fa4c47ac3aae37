//! Command implementations

pub mod benchmark;
pub mod letters;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, pick_targets, run_benchmark};
pub use letters::{LettersResult, analyze_letters};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
