//! Everything learned about the answer so far

use crate::core::{LetterSet, WORD_LEN, Word};

/// Per-position constraints accumulated over a game
///
/// `possible_at[i]` holds the letters that may still occupy position `i`.
/// `required_elsewhere[i]` holds the letters known to be in the answer but
/// not at `i`. Both are pinned once position `i` is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintModel {
    pub(crate) possible_at: [LetterSet; WORD_LEN],
    pub(crate) required_elsewhere: [LetterSet; WORD_LEN],
}

impl ConstraintModel {
    /// Every letter possible everywhere, nothing required
    #[must_use]
    pub const fn new() -> Self {
        Self {
            possible_at: [LetterSet::full(); WORD_LEN],
            required_elsewhere: [LetterSet::empty(); WORD_LEN],
        }
    }

    #[must_use]
    pub const fn possible_at(&self, position: usize) -> &LetterSet {
        &self.possible_at[position]
    }

    #[must_use]
    pub const fn required_elsewhere(&self, position: usize) -> &LetterSet {
        &self.required_elsewhere[position]
    }

    /// Whether every letter of `word` is still possible at its position
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.possible_at
            .iter()
            .zip(word.chars())
            .all(|(set, &letter)| set.contains(letter))
    }

    /// Whether some position is pinned to `letter`
    #[must_use]
    pub fn is_pinned_anywhere(&self, letter: u8) -> bool {
        self.possible_at.iter().any(|set| set.is_pinned_to(letter))
    }

    #[must_use]
    pub fn pinned_count(&self) -> usize {
        self.possible_at.iter().filter(|set| set.is_pinned()).count()
    }

    /// Confirmed letters with `X` in unknown slots, e.g. `XXaXe`
    #[must_use]
    pub fn board(&self) -> String {
        self.possible_at
            .iter()
            .map(|set| set.pinned_char().unwrap_or('X'))
            .collect()
    }

    pub(crate) fn pin(&mut self, position: usize, letter: u8) {
        self.possible_at[position].pin(letter);
        self.required_elsewhere[position].pin(letter);
    }
}

impl Default for ConstraintModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_admits_everything() {
        let model = ConstraintModel::new();
        for i in 0..WORD_LEN {
            assert_eq!(model.possible_at(i).len(), 26);
            assert!(model.required_elsewhere(i).is_empty());
        }
        assert!(model.admits(&Word::new("zzzzz").unwrap()));
        assert_eq!(model.board(), "XXXXX");
        assert_eq!(model.pinned_count(), 0);
    }

    #[test]
    fn pin_updates_both_roles() {
        let mut model = ConstraintModel::new();
        model.pin(2, b'a');

        assert!(model.possible_at(2).is_pinned_to(b'a'));
        assert!(model.required_elsewhere(2).is_pinned_to(b'a'));
        assert!(model.is_pinned_anywhere(b'a'));
        assert!(!model.is_pinned_anywhere(b'b'));
        assert_eq!(model.board(), "XXaXX");
    }

    #[test]
    fn admits_checks_each_position() {
        let mut model = ConstraintModel::new();
        model.pin(4, b'e');

        assert!(model.admits(&Word::new("crane").unwrap()));
        assert!(!model.admits(&Word::new("crank").unwrap()));
    }
}
