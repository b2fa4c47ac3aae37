//! Wordle word representation
//!
//! A Word stores a fixed-length lowercase word along with its distinct letters.

use super::{LetterSet, SolverError, WORD_LEN};
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated `WORD_LEN`-letter word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    letters: LetterSet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `SolverError::WordLengthMismatch` if the length is not
    /// `WORD_LEN`, or `SolverError::InvalidLetter` for anything that is not
    /// an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SolverError> {
        let text: String = text.into().to_lowercase();

        let actual = text.chars().count();
        if actual != WORD_LEN {
            return Err(SolverError::WordLengthMismatch {
                expected: WORD_LEN,
                actual,
            });
        }

        if let Some((position, letter)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(SolverError::InvalidLetter { position, letter });
        }

        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());
        let letters = LetterSet::from_letters(&chars);

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(SolverError::WordLengthMismatch {
                expected: 5,
                actual: 8
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(SolverError::WordLengthMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(SolverError::InvalidLetter {
                position: 4,
                letter: '3'
            })
        );
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letters().to_list(), vec!['d', 'e', 'p', 's']);
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
