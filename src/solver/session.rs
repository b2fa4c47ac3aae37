//! One game of solving
//!
//! A session owns the constraint model, the shrinking allow-list and the
//! fixed dictionary, and moves between `Active`, `Solved` and `Exhausted`
//! as feedback arrives.

use super::constraints::ConstraintModel;
use super::filter::filter_allow_list;
use super::frequency::{LetterHistogram, letter_histogram, select_best_guess};
use super::ingest::apply_feedback;
use crate::core::{FeedbackRound, LetterSet, SolverError, Word};
use std::fmt;

/// Where a session stands, by allow-list size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Solved,
    /// No candidate remains; the feedback contradicted itself
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Solved => write!(f, "solved"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// The word to play next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: Word,
    /// The word is the only remaining candidate
    pub solved: bool,
    /// Letter-frequency score; `None` when solved
    pub score: Option<u64>,
}

/// Outcome of one feedback round
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub guess: Word,
    pub feedback: FeedbackRound,
    pub present: LetterSet,
    pub deductions: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub state: SessionState,
}

/// Solver state for a single game
#[derive(Debug, Clone)]
pub struct SolverSession {
    model: ConstraintModel,
    allow_list: Vec<Word>,
    dictionary: Vec<Word>,
    round: usize,
}

impl SolverSession {
    /// Start a game over `allow_list` (possible answers), guessing from
    /// `dictionary` (legal guesses)
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` if there is nothing to guess.
    pub fn new(allow_list: Vec<Word>, dictionary: Vec<Word>) -> Result<Self, SolverError> {
        if dictionary.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }

        Ok(Self {
            model: ConstraintModel::new(),
            allow_list,
            dictionary,
            round: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.allow_list.len() {
            0 => SessionState::Exhausted,
            1 => SessionState::Solved,
            _ => SessionState::Active,
        }
    }

    /// Suggest the next guess
    ///
    /// With one candidate left it is returned as solved and the dictionary is
    /// not consulted.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemain` once the allow-list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::Word;
    /// use wordle_deduce::solver::SolverSession;
    ///
    /// let allow: Vec<Word> = ["apple", "angle", "ankle"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session = SolverSession::new(allow.clone(), allow).unwrap();
    ///
    /// session.apply_feedback("apple", "gbbgg").unwrap();
    /// assert_eq!(session.candidates().len(), 2);
    ///
    /// let next = session.next_guess().unwrap();
    /// assert!(!next.solved);
    /// ```
    pub fn next_guess(&self) -> Result<Suggestion, SolverError> {
        match self.state() {
            SessionState::Exhausted => Err(SolverError::NoCandidatesRemain),
            SessionState::Solved => Ok(Suggestion {
                word: self.allow_list[0].clone(),
                solved: true,
                score: None,
            }),
            SessionState::Active => {
                let histogram = self.histogram();
                let (word, score) = select_best_guess(&self.dictionary, &histogram)
                    .ok_or(SolverError::EmptyDictionary)?;
                Ok(Suggestion {
                    word: word.clone(),
                    solved: false,
                    score: Some(score),
                })
            }
        }
    }

    /// Parse and apply one round of feedback for `guess`
    ///
    /// Both strings are validated in full before the session changes.
    ///
    /// # Errors
    /// Returns `SolverError::WordLengthMismatch`, `SolverError::InvalidLetter`
    /// or `SolverError::InvalidFeedbackCode` for malformed input; the session
    /// is untouched in that case.
    pub fn apply_feedback(
        &mut self,
        guess: &str,
        feedback: &str,
    ) -> Result<RoundSummary, SolverError> {
        let guess = Word::new(guess)?;
        let feedback = FeedbackRound::parse(feedback)?;
        Ok(self.apply_round(&guess, feedback))
    }

    /// Apply an already-validated round: ingest, then narrow the candidates
    pub fn apply_round(&mut self, guess: &Word, feedback: FeedbackRound) -> RoundSummary {
        let candidates_before = self.allow_list.len();
        let ingestion = apply_feedback(&mut self.model, guess, &feedback);
        self.narrow_candidates(&ingestion.present);
        self.round += 1;

        RoundSummary {
            guess: guess.clone(),
            feedback,
            present: ingestion.present,
            deductions: ingestion.deductions,
            candidates_before,
            candidates_after: self.allow_list.len(),
            state: self.state(),
        }
    }

    /// Drop candidates the model no longer admits or that lack a letter in
    /// `present`; returns how many were removed
    pub fn narrow_candidates(&mut self, present: &LetterSet) -> usize {
        filter_allow_list(&mut self.allow_list, &self.model, present)
    }

    /// Letter histogram over the current candidates
    #[must_use]
    pub fn histogram(&self) -> LetterHistogram {
        letter_histogram(&self.allow_list, &self.model)
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.allow_list
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    /// Rounds applied so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}
