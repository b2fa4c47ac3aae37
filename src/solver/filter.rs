//! Candidate filtering against the constraint model

use super::constraints::ConstraintModel;
use crate::core::{LetterSet, Word};

/// Remove words that the model no longer admits
///
/// A word survives if every letter is still possible at its position and it
/// contains every letter in `present`. Order is preserved. Returns the number
/// of words removed.
///
/// # Examples
/// ```
/// use wordle_deduce::core::{FeedbackRound, Word};
/// use wordle_deduce::solver::{ConstraintModel, apply_feedback, filter_allow_list};
///
/// let mut allow_list: Vec<Word> = ["brake", "crate", "grate", "share", "spare"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut model = ConstraintModel::new();
/// let guess = Word::new("crane").unwrap();
/// let ingestion = apply_feedback(&mut model, &guess, &FeedbackRound::parse("bygbg").unwrap());
///
/// let removed = filter_allow_list(&mut allow_list, &model, &ingestion.present);
/// assert_eq!(removed, 3);
/// assert_eq!(allow_list[0].text(), "share");
/// ```
pub fn filter_allow_list(
    allow_list: &mut Vec<Word>,
    model: &ConstraintModel,
    present: &LetterSet,
) -> usize {
    let before = allow_list.len();
    allow_list.retain(|word| model.admits(word) && contains_all(word, *present));
    before - allow_list.len()
}

/// Whether `word` contains every letter of `required`
fn contains_all(word: &Word, required: LetterSet) -> bool {
    required.iter().all(|letter| word.has_letter(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRound;
    use crate::solver::ingest::apply_feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    #[test]
    fn positional_filter() {
        let mut model = ConstraintModel::new();
        model.pin(0, b'a');
        let mut allow_list = words(&["apple", "angle", "bagel"]);

        let removed = filter_allow_list(&mut allow_list, &model, &LetterSet::empty());

        assert_eq!(removed, 1);
        assert_eq!(texts(&allow_list), vec!["apple", "angle"]);
    }

    #[test]
    fn presence_filter_removes_words_missing_letter() {
        // Every position still admits every letter, but K is known present
        let model = ConstraintModel::new();
        let mut allow_list = words(&["angle", "ankle", "apple"]);

        filter_allow_list(&mut allow_list, &model, &LetterSet::from_letters(b"k"));

        assert_eq!(texts(&allow_list), vec!["ankle"]);
    }

    #[test]
    fn filters_compose_as_conjunction() {
        let mut model = ConstraintModel::new();
        let guess = Word::new("crane").unwrap();
        let round = FeedbackRound::parse("bygbg").unwrap();
        let ingestion = apply_feedback(&mut model, &guess, &round);

        let mut allow_list = words(&["brake", "crate", "grate", "glare", "abate", "shake"]);
        filter_allow_list(&mut allow_list, &model, &ingestion.present);

        // brake, crate, grate: R in the second slot. abate, shake: no R at all
        assert_eq!(texts(&allow_list), vec!["glare"]);
    }

    #[test]
    fn trailing_greens_keep_only_matching_ends() {
        let mut model = ConstraintModel::new();
        let guess = Word::new("crane").unwrap();
        let round = FeedbackRound::parse("bybgg").unwrap();
        let ingestion = apply_feedback(&mut model, &guess, &round);

        let mut allow_list = words(&["rhyne", "brine", "share", "urine", "prone"]);
        let removed = filter_allow_list(&mut allow_list, &model, &ingestion.present);

        // brine, urine, prone: R in the second slot. share: A and no N
        assert_eq!(removed, 4);
        assert_eq!(texts(&allow_list), vec!["rhyne"]);
    }

    #[test]
    fn secret_survives_its_own_feedback() {
        let secret = Word::new("creep").unwrap();
        let mut allow_list = words(&["creep", "crepe", "sleep", "cheer", "erupt"]);
        let mut model = ConstraintModel::new();

        for guess in ["geese", "speed", "crepe"] {
            let guess = Word::new(guess).unwrap();
            let round = FeedbackRound::calculate(&guess, &secret);
            let before = allow_list.len();
            let ingestion = apply_feedback(&mut model, &guess, &round);
            filter_allow_list(&mut allow_list, &model, &ingestion.present);

            assert!(allow_list.len() <= before);
            assert!(allow_list.contains(&secret));
        }
    }

    #[test]
    fn empty_list_stays_empty() {
        let mut allow_list = Vec::new();
        let removed = filter_allow_list(&mut allow_list, &ConstraintModel::new(), &LetterSet::empty());
        assert_eq!(removed, 0);
    }
}
