//! Word solving command
//!
//! Plays a game against a known target and records every round.

use crate::core::{FeedbackRound, SolverError, Word};
use crate::solver::{SessionState, SolverSession};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Play this word first instead of the suggested one
    pub first_word: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            first_word: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: FeedbackRound,
    pub score: Option<u64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub deductions: usize,
    pub board: String,
}

/// Solve a specific word starting from `session`
///
/// # Errors
///
/// Returns an error if the target word is malformed, or if the candidates run
/// out, which happens when the target is not in the allow-list.
pub fn solve_word(
    config: SolveConfig,
    mut session: SolverSession,
) -> Result<SolveResult, SolverError> {
    let target = Word::new(&config.target)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 1..=config.max_guesses {
        let (guess, score) = if let (Some(forced), 1) = (&config.first_word, turn) {
            (forced.clone(), None)
        } else {
            let suggestion = session.next_guess()?;
            (suggestion.word, suggestion.score)
        };

        let feedback = FeedbackRound::calculate(&guess, &target);
        let summary = session.apply_round(&guess, feedback);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            score,
            candidates_before: summary.candidates_before,
            candidates_after: summary.candidates_after,
            deductions: summary.deductions,
            board: session.model().board(),
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
        if summary.state == SessionState::Exhausted {
            return Err(SolverError::NoCandidatesRemain);
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const ANSWERS: &[&str] = &[
        "brake", "share", "spare", "glare", "crate", "slate", "plate", "irate", "grate", "trace",
    ];

    fn session() -> SolverSession {
        let allow = words_from_slice(ANSWERS);
        let mut dictionary = words_from_slice(&["crane", "stole", "pudgy"]);
        dictionary.extend(allow.iter().cloned());
        SolverSession::new(allow, dictionary).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        for &target in ANSWERS {
            let result = solve_word(SolveConfig::new(target.to_string()), session()).unwrap();

            assert!(!result.guesses.is_empty());
            for step in &result.guesses {
                assert!(step.candidates_after <= step.candidates_before);
            }
            if result.success {
                assert_eq!(result.guesses.last().unwrap().word, target);
            }
        }
    }

    #[test]
    fn solve_records_feedback() {
        let result = solve_word(SolveConfig::new("spare".to_string()), session()).unwrap();

        let first = &result.guesses[0];
        let expected = FeedbackRound::calculate(
            &Word::new(first.word.as_str()).unwrap(),
            &Word::new("spare").unwrap(),
        );
        assert_eq!(first.feedback, expected);
        assert!(first.score.is_some());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let result = solve_word(SolveConfig::new("zz".to_string()), session());
        assert!(matches!(
            result,
            Err(SolverError::WordLengthMismatch { .. })
        ));
    }

    #[test]
    fn solve_target_outside_allow_list_runs_out() {
        let result = solve_word(SolveConfig::new("zesty".to_string()), session());
        assert!(matches!(result, Err(SolverError::NoCandidatesRemain)));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("grate".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, session()).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_with_forced_first_word() {
        let mut config = SolveConfig::new("slate".to_string());
        config.first_word = Some(Word::new("pudgy").unwrap());

        let result = solve_word(config, session()).unwrap();
        assert_eq!(result.guesses[0].word, "pudgy");
        assert_eq!(result.guesses[0].score, None);
    }
}
