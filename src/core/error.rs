//! Errors raised by the solver core

use std::fmt;

/// Error type for invalid input and unusable solver state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A feedback character outside `b`, `y`, `g`
    InvalidFeedbackCode { position: usize, code: char },
    /// The allow-list is empty; earlier feedback was contradictory
    NoCandidatesRemain,
    /// A guess or feedback string of the wrong length
    WordLengthMismatch { expected: usize, actual: usize },
    /// A word containing something other than an ASCII letter
    InvalidLetter { position: usize, letter: char },
    /// A session was created without any legal guesses
    EmptyDictionary,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedbackCode { position, code } => write!(
                f,
                "Invalid feedback code {code:?} at position {}; use b, y or g",
                position + 1
            ),
            Self::NoCandidatesRemain => {
                write!(f, "No candidates remain; the feedback may be incorrect")
            }
            Self::WordLengthMismatch { expected, actual } => {
                write!(f, "Expected exactly {expected} letters, got {actual}")
            }
            Self::InvalidLetter { position, letter } => write!(
                f,
                "Invalid character {letter:?} at position {}",
                position + 1
            ),
            Self::EmptyDictionary => write!(f, "The dictionary contains no words"),
        }
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        let err = SolverError::InvalidFeedbackCode {
            position: 0,
            code: 'x',
        };
        assert_eq!(
            err.to_string(),
            "Invalid feedback code 'x' at position 1; use b, y or g"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = SolverError::WordLengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Expected exactly 5 letters, got 3");
    }
}
