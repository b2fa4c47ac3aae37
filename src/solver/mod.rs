//! Wordle solving engine
//!
//! Constraint tracking, feedback ingestion, candidate filtering and
//! letter-frequency guess selection, composed by `SolverSession`.

mod constraints;
mod filter;
mod frequency;
mod ingest;
mod session;

pub use constraints::ConstraintModel;
pub use filter::filter_allow_list;
pub use frequency::{LetterHistogram, letter_histogram, select_best_guess};
pub use ingest::{Ingestion, apply_feedback, deduce};
pub use session::{RoundSummary, SessionState, SolverSession, Suggestion};
