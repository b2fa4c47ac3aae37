//! Word lists for Wordle solving
//!
//! Word lists are line-delimited text files: an allow-list of possible
//! answers and a dictionary of every legal guess.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};

/// Default allow-list path, relative to the working directory
pub const DEFAULT_ALLOW_PATH: &str = "allow_word.txt";

/// Default dictionary path, relative to the working directory
pub const DEFAULT_DICTIONARY_PATH: &str = "all_word.txt";
