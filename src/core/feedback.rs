//! Per-position feedback codes
//!
//! A feedback round is `WORD_LEN` codes aligned to the guessed word, written
//! as a string over `b` (absent), `y` (misplaced) and `g` (confirmed).

use super::{SolverError, WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The letter does not occur (beyond occurrences confirmed elsewhere)
    Absent,
    /// The letter occurs, but not at this position
    Misplaced,
    /// The letter occurs at this position
    Confirmed,
}

impl Feedback {
    /// Parse one feedback character
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedbackCode` for anything but `b`, `y`, `g`.
    pub const fn from_code(position: usize, code: char) -> Result<Self, SolverError> {
        match code {
            'b' => Ok(Self::Absent),
            'y' => Ok(Self::Misplaced),
            'g' => Ok(Self::Confirmed),
            _ => Err(SolverError::InvalidFeedbackCode { position, code }),
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Misplaced => 'y',
            Self::Confirmed => 'g',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Misplaced => '🟨',
            Self::Confirmed => '🟩',
        }
    }
}

/// One round of feedback, aligned to a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRound([Feedback; WORD_LEN]);

impl FeedbackRound {
    /// All positions confirmed
    pub const SOLVED: Self = Self([Feedback::Confirmed; WORD_LEN]);

    #[must_use]
    pub const fn new(codes: [Feedback; WORD_LEN]) -> Self {
        Self(codes)
    }

    /// Parse a feedback string such as `"bybgg"`
    ///
    /// The whole string is validated before anything is returned.
    ///
    /// # Errors
    /// Returns `SolverError::WordLengthMismatch` if the string is not
    /// `WORD_LEN` characters, or `SolverError::InvalidFeedbackCode` for the
    /// first character outside `b`, `y`, `g`.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::{Feedback, FeedbackRound};
    ///
    /// let round = FeedbackRound::parse("bybgg").unwrap();
    /// assert_eq!(round.codes()[1], Feedback::Misplaced);
    /// assert!(FeedbackRound::parse("bybgx").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        let actual = input.chars().count();
        if actual != WORD_LEN {
            return Err(SolverError::WordLengthMismatch {
                expected: WORD_LEN,
                actual,
            });
        }

        let mut codes = [Feedback::Absent; WORD_LEN];
        for (position, (slot, code)) in codes.iter_mut().zip(input.chars()).enumerate() {
            *slot = Feedback::from_code(position, code)?;
        }
        Ok(Self(codes))
    }

    /// Feedback the game would give for `guess` when the answer is `answer`
    ///
    /// Follows the game's duplicate-letter rules: exact matches first, then
    /// misplaced letters drawn from what remains of the answer's letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::{FeedbackRound, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(FeedbackRound::calculate(&guess, &answer).to_string(), "bbgbg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut answer_available = answer.char_counts();

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = Feedback::Confirmed;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Absent
                && let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = Feedback::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[must_use]
    pub const fn codes(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&code| code == kind).count()
    }

    /// Render as `⬜🟨🟩...`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|code| code.emoji()).collect()
    }
}

impl FromStr for FeedbackRound {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        FeedbackRound::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn parse_valid() {
        let round = FeedbackRound::parse("gybbg").unwrap();
        assert_eq!(
            round.codes(),
            &[
                Feedback::Confirmed,
                Feedback::Misplaced,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Confirmed,
            ]
        );
        assert_eq!(round.count(Feedback::Confirmed), 2);
        assert_eq!(round.to_string(), "gybbg");
    }

    #[test]
    fn parse_rejects_bad_code() {
        assert_eq!(
            FeedbackRound::parse("gyxbg"),
            Err(SolverError::InvalidFeedbackCode {
                position: 2,
                code: 'x'
            })
        );
        // Only lowercase codes are accepted
        assert!(FeedbackRound::parse("GYBBG").is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            FeedbackRound::parse("gyb"),
            Err(SolverError::WordLengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert!(FeedbackRound::parse("").is_err());
        assert!(FeedbackRound::parse("gybbgg").is_err());
    }

    #[test]
    fn calculate_all_absent() {
        assert_eq!(feedback("quick", "dream"), "bbbbb");
    }

    #[test]
    fn calculate_all_confirmed() {
        let word = Word::new("crane").unwrap();
        assert!(FeedbackRound::calculate(&word, &word).is_solved());
    }

    #[test]
    fn calculate_duplicate_in_guess() {
        // Both E's line up with the answer; P is misplaced
        assert_eq!(feedback("speed", "creep"), "byggb");
    }

    #[test]
    fn calculate_duplicate_partial_match() {
        // ROBOT vs FLOOR: first O misplaced, second O confirmed
        assert_eq!(feedback("robot", "floor"), "yybgb");
    }

    #[test]
    fn calculate_duplicate_limited_by_answer() {
        // One E is green, the answer has one more E to hand out
        assert_eq!(feedback("geese", "creep"), "bygbb");
    }

    #[test]
    fn emoji_rendering() {
        let round = FeedbackRound::parse("bygbb").unwrap();
        assert_eq!(round.to_emoji(), "⬜🟨🟩⬜⬜");
    }
}
