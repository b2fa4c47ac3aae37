//! Letter-frequency analysis command
//!
//! Shows the letter histogram for the current candidates and the
//! dictionary words that score best against it.

use crate::solver::SolverSession;

/// Result of letter analysis
pub struct LettersResult {
    pub candidates: usize,
    pub ranked_letters: Vec<(char, u32)>,
    pub top_guesses: Vec<(String, u64)>,
}

/// Rank letters and the best `top` guesses for `session`
///
/// Guesses are ordered by descending score, ties in dictionary order, so the
/// first entry matches the session's own suggestion while it is active.
#[must_use]
pub fn analyze_letters(session: &SolverSession, top: usize) -> LettersResult {
    let histogram = session.histogram();

    let mut scored: Vec<(usize, u64)> = session
        .dictionary()
        .iter()
        .enumerate()
        .map(|(index, word)| (index, histogram.score(word)))
        .collect();
    scored.sort_by(|(i1, s1), (i2, s2)| s2.cmp(s1).then(i1.cmp(i2)));

    let top_guesses = scored
        .into_iter()
        .take(top)
        .map(|(index, score)| (session.dictionary()[index].text().to_string(), score))
        .collect();

    LettersResult {
        candidates: session.candidates().len(),
        ranked_letters: histogram.ranked(),
        top_guesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn session() -> SolverSession {
        let allow = words_from_slice(&["crane", "slate", "trace", "crate", "stare"]);
        SolverSession::new(allow.clone(), allow).unwrap()
    }

    #[test]
    fn top_guess_matches_suggestion() {
        let session = session();
        let result = analyze_letters(&session, 3);

        let suggestion = session.next_guess().unwrap();
        assert_eq!(result.top_guesses[0].0, suggestion.word.text());
        assert_eq!(Some(result.top_guesses[0].1), suggestion.score);
        assert_eq!(result.top_guesses.len(), 3);
    }

    #[test]
    fn scores_descend() {
        let result = analyze_letters(&session(), 10);

        assert_eq!(result.candidates, 5);
        assert_eq!(result.top_guesses.len(), 5);
        assert!(result.top_guesses.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(result.ranked_letters[0], ('a', 5));
    }
}
