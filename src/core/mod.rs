//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are plain values with cheap copies where possible.

mod error;
mod feedback;
mod letters;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, FeedbackRound};
pub use letters::{ALPHABET_LEN, LetterSet};
pub use word::Word;

/// Word length of the reference game
pub const WORD_LEN: usize = 5;
