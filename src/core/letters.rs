//! Per-position letter possibility sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z` that can additionally be
//! pinned to a single confirmed letter.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

/// Bit for a lowercase ASCII letter
///
/// # Panics
/// Panics if `letter` is not in `a..=z`. Callers validate user input before
/// it reaches the constraint model, so anything else is a bug.
#[inline]
fn bit(letter: u8) -> u32 {
    assert!(
        letter.is_ascii_lowercase(),
        "letter out of range: {:?}",
        letter as char
    );
    1 << (letter - b'a')
}

/// A set of letters, optionally pinned to one confirmed letter
///
/// Invariant: when pinned, the set contains exactly the pinned letter.
/// A pinned set ignores `add` and `remove`; only `pin` can change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet {
    mask: u32,
    pinned: Option<u8>,
}

impl LetterSet {
    /// Every letter possible
    #[must_use]
    pub const fn full() -> Self {
        Self {
            mask: FULL_MASK,
            pinned: None,
        }
    }

    /// No letter present
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            mask: 0,
            pinned: None,
        }
    }

    /// The distinct letters of `letters`
    ///
    /// ```
    /// use wordle_deduce::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters(b"speed");
    /// assert_eq!(set.to_list(), vec!['d', 'e', 'p', 's']);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::empty();
        for &letter in letters {
            set.add(letter);
        }
        set
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.mask & bit(letter) != 0
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        let bit = bit(letter);
        if self.pinned.is_none() {
            self.mask &= !bit;
        }
    }

    #[inline]
    pub fn add(&mut self, letter: u8) {
        let bit = bit(letter);
        if self.pinned.is_none() {
            self.mask |= bit;
        }
    }

    /// Collapse the set to exactly `letter`
    pub fn pin(&mut self, letter: u8) {
        self.mask = bit(letter);
        self.pinned = Some(letter);
    }

    #[inline]
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    #[inline]
    #[must_use]
    pub fn pinned_char(&self) -> Option<char> {
        self.pinned.map(char::from)
    }

    /// Whether this set is pinned to `letter`
    #[inline]
    #[must_use]
    pub fn is_pinned_to(&self, letter: u8) -> bool {
        self.pinned == Some(letter)
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Letters in the set, ascending
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.contains(letter))
    }

    /// Letters in the set, ascending
    #[must_use]
    pub fn to_list(&self) -> Vec<char> {
        self.iter().map(char::from).collect()
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_contains_every_letter() {
        let set = LetterSet::full();
        assert_eq!(set.len(), ALPHABET_LEN);
        assert!((b'a'..=b'z').all(|c| set.contains(c)));
        assert!(!set.is_pinned());
    }

    #[test]
    fn empty_contains_nothing() {
        let set = LetterSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.to_list(), Vec::<char>::new());
    }

    #[test]
    fn add_and_remove() {
        let mut set = LetterSet::empty();
        set.add(b'q');
        set.add(b'a');
        assert_eq!(set.to_list(), vec!['a', 'q']);

        set.remove(b'q');
        assert!(!set.contains(b'q'));
        assert!(set.contains(b'a'));
    }

    #[test]
    fn pin_collapses_to_one_letter() {
        let mut set = LetterSet::full();
        set.pin(b'e');

        assert!(set.is_pinned());
        assert!(set.is_pinned_to(b'e'));
        assert_eq!(set.pinned_char(), Some('e'));
        assert_eq!(set.to_list(), vec!['e']);
    }

    #[test]
    fn pinned_set_ignores_add_and_remove() {
        let mut set = LetterSet::full();
        set.pin(b'e');
        set.add(b'z');
        set.remove(b'e');

        assert_eq!(set.to_list(), vec!['e']);
        assert_eq!(set.pinned_char(), Some('e'));
    }

    #[test]
    fn repin_moves_the_letter() {
        let mut set = LetterSet::empty();
        set.pin(b'a');
        set.pin(b'b');
        assert_eq!(set.to_list(), vec!['b']);
        assert_eq!(set.pinned_char(), Some('b'));
    }

    #[test]
    fn display_lists_letters() {
        let set = LetterSet::from_letters(b"crane");
        assert_eq!(set.to_string(), "acenr");
    }

    #[test]
    #[should_panic(expected = "letter out of range")]
    fn uppercase_is_a_bug() {
        let _ = LetterSet::full().contains(b'A');
    }
}
