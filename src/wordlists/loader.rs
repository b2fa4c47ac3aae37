//! Word list loading utilities
//!
//! Provides functions to load word lists from files or build them from slices.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and lowercased. Blank lines, words of the wrong length
/// and words with non-letters are skipped, as are repeats of earlier words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_deduce::wordlists::loader::load_from_file;
///
/// let words = load_from_file("allow_word.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(content.lines()))
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_deduce::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_words(slice.iter().copied())
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
