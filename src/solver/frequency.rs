//! Letter-frequency guess selection
//!
//! Each remaining candidate votes once for every letter it could still reveal.
//! A guess scores the votes of its distinct letters; the highest score wins.

use super::constraints::ConstraintModel;
use crate::core::{ALPHABET_LEN, LetterSet, WORD_LEN, Word};
use rayon::prelude::*;

/// Per-letter counts over the remaining candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHistogram([u32; ALPHABET_LEN]);

impl LetterHistogram {
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ALPHABET_LEN])
    }

    /// Count of `letter`
    ///
    /// # Panics
    /// Panics if `letter` is not in `a..=z`.
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        assert!(letter.is_ascii_lowercase(), "letter out of range");
        self.0[usize::from(letter - b'a')]
    }

    fn record(&mut self, letters: LetterSet) {
        for letter in letters.iter() {
            self.0[usize::from(letter - b'a')] += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (count, extra) in self.0.iter_mut().zip(other.0) {
            *count += extra;
        }
        self
    }

    /// Sum of the counts of the distinct letters of `word`
    #[must_use]
    pub fn score(&self, word: &Word) -> u64 {
        word.letters()
            .iter()
            .map(|letter| u64::from(self.count(letter)))
            .sum()
    }

    /// Letters by descending count, ties in alphabetical order
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, u32)> {
        let mut ranked: Vec<(char, u32)> = (b'a'..=b'z')
            .map(|letter| (char::from(letter), self.count(letter)))
            .collect();
        ranked.sort_by(|(l1, c1), (l2, c2)| c2.cmp(c1).then(l1.cmp(l2)));
        ranked
    }
}

impl Default for LetterHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Letters of `word` that guessing could still teach us something about
///
/// A letter counts if it sits at some position where it is not already
/// known: not listed as misplaced there, and not the confirmed letter there.
fn informative_letters(word: &Word, model: &ConstraintModel) -> LetterSet {
    let mut letters = LetterSet::empty();
    for i in 0..WORD_LEN {
        let letter = word.char_at(i);
        if !model.required_elsewhere(i).contains(letter) {
            letters.add(letter);
        }
    }
    letters
}

/// Build the letter histogram for the remaining candidates
///
/// Each word adds at most one to each letter's count.
#[must_use]
pub fn letter_histogram(allow_list: &[Word], model: &ConstraintModel) -> LetterHistogram {
    allow_list
        .par_iter()
        .fold(LetterHistogram::new, |mut histogram, word| {
            histogram.record(informative_letters(word, model));
            histogram
        })
        .reduce(LetterHistogram::new, LetterHistogram::merge)
}

/// Select the dictionary word with the highest letter-frequency score
///
/// Ties go to the word that appears first in `dictionary`. Returns `None`
/// only when the dictionary is empty.
///
/// # Examples
/// ```
/// use wordle_deduce::core::Word;
/// use wordle_deduce::solver::{ConstraintModel, letter_histogram, select_best_guess};
///
/// let words: Vec<Word> = ["slate", "crate", "trace", "fuzzy"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let histogram = letter_histogram(&words[..3], &ConstraintModel::new());
///
/// let (best, score) = select_best_guess(&words, &histogram).unwrap();
/// assert_eq!(best.text(), "crate");
/// assert_eq!(score, 13);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    dictionary: &'a [Word],
    histogram: &LetterHistogram,
) -> Option<(&'a Word, u64)> {
    dictionary
        .par_iter()
        .enumerate()
        .map(|(index, word)| (index, histogram.score(word)))
        .reduce_with(|best, next| {
            if next.1 > best.1 || (next.1 == best.1 && next.0 < best.0) {
                next
            } else {
                best
            }
        })
        .map(|(index, score)| (&dictionary[index], score))
}
