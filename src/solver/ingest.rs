//! Feedback ingestion and yellow-to-green deduction
//!
//! Applying a round tightens the constraint model, then repeatedly looks for
//! misplaced letters that have only one slot left and pins them there.

use super::constraints::ConstraintModel;
use crate::core::{Feedback, FeedbackRound, LetterSet, WORD_LEN, Word};

/// What one round of feedback taught the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingestion {
    /// Letters reported misplaced this round
    pub present: LetterSet,
    /// Positions pinned by deduction rather than by direct feedback
    pub deductions: usize,
    /// Deduction passes run, including the final idle one
    pub passes: usize,
}

/// Apply one round of feedback to `model`
///
/// Confirmations and misplacements are applied before absences, and an
/// absence never clears a pinned position. A letter reported absent at one
/// slot and misplaced at another in the same round is only removed from its
/// own slot; otherwise an absent letter is removed everywhere.
///
/// Both inputs are already validated, so this cannot fail part-way.
///
/// # Examples
/// ```
/// use wordle_deduce::core::{FeedbackRound, Word};
/// use wordle_deduce::solver::{ConstraintModel, apply_feedback};
///
/// let mut model = ConstraintModel::new();
/// let guess = Word::new("crane").unwrap();
/// let round = FeedbackRound::parse("bygbg").unwrap();
///
/// let ingestion = apply_feedback(&mut model, &guess, &round);
/// assert_eq!(ingestion.present.to_list(), vec!['r']);
/// assert_eq!(model.board(), "XXaXe");
/// ```
pub fn apply_feedback(
    model: &mut ConstraintModel,
    guess: &Word,
    round: &FeedbackRound,
) -> Ingestion {
    let mut present = LetterSet::empty();

    for (i, (&letter, &code)) in guess.chars().iter().zip(round.codes()).enumerate() {
        match code {
            Feedback::Misplaced => {
                model.possible_at[i].remove(letter);
                model.required_elsewhere[i].add(letter);
                present.add(letter);
            }
            Feedback::Confirmed => model.pin(i, letter),
            Feedback::Absent => {}
        }
    }

    for (i, (&letter, &code)) in guess.chars().iter().zip(round.codes()).enumerate() {
        if code != Feedback::Absent {
            continue;
        }
        if present.contains(letter) {
            model.possible_at[i].remove(letter);
        } else {
            for set in &mut model.possible_at {
                set.remove(letter);
            }
        }
    }

    let (deductions, passes) = deduce(model);

    Ingestion {
        present,
        deductions,
        passes,
    }
}

/// Run the yellow-to-green deduction until a pass changes nothing
///
/// Returns `(positions pinned, passes run)`. Every productive pass pins at
/// least one more position, so at most `WORD_LEN + 1` passes run.
pub fn deduce(model: &mut ConstraintModel) -> (usize, usize) {
    let mut deductions = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let pinned = deduction_pass(model);
        if pinned == 0 {
            return (deductions, passes);
        }
        deductions += pinned;
    }
}

fn deduction_pass(model: &mut ConstraintModel) -> usize {
    let mut pinned = 0;

    for i in 0..WORD_LEN {
        if model.possible_at[i].is_pinned() {
            continue;
        }

        let misplaced = model.required_elsewhere[i];
        for letter in misplaced.iter() {
            if model.is_pinned_anywhere(letter) {
                continue;
            }
            if let Some(position) = sole_slot(model, letter) {
                model.pin(position, letter);
                pinned += 1;
            }
        }
    }

    pinned
}

/// The only unpinned position still able to hold `letter`, if there is exactly one
fn sole_slot(model: &ConstraintModel, letter: u8) -> Option<usize> {
    let mut slots = (0..WORD_LEN).filter(|&j| {
        model.possible_at[j].contains(letter)
            && !model.required_elsewhere[j].contains(letter)
            && !model.possible_at[j].is_pinned()
    });

    match (slots.next(), slots.next()) {
        (Some(position), None) => Some(position),
        _ => None,
    }
}
