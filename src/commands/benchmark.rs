//! Benchmark command
//!
//! Plays the solver against many targets and collects statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::SolverSession;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the targets to benchmark
///
/// With a count, draws that many distinct words using `seed`; without one,
/// takes every word in order.
#[must_use]
pub fn pick_targets(allow_list: &[Word], count: Option<usize>, seed: u64) -> Vec<Word> {
    match count {
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(seed);
            allow_list.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => allow_list.to_vec(),
    }
}

/// Run benchmark on a set of target words
///
/// Each target gets its own copy of `session`. If `forced_first` is provided,
/// it is played as the first guess instead of the suggestion. A target counts
/// as solved only within six guesses.
#[must_use]
pub fn run_benchmark(
    session: &SolverSession,
    target_words: &[Word],
    forced_first: Option<&Word>,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(String, Option<usize>)> = target_words
        .par_iter()
        .map(|target| {
            let mut config = SolveConfig::new(target.text().to_string());
            config.first_word = forced_first.cloned();

            let guesses = solve_word(config, session.clone())
                .ok()
                .filter(|result| result.success)
                .map(|result| result.guesses.len());
            pb.inc(1);
            (target.text().to_string(), guesses)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved: Vec<(&str, usize)> = outcomes
        .iter()
        .filter_map(|(word, guesses)| guesses.map(|n| (word.as_str(), n)))
        .collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &(_, guesses) in &solved {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|&(_, n)| n).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|&&(_, n)| n >= 5)
        .map(|&(word, n)| (word.to_string(), n))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved: solved.len(),
        failed: total_words - solved.len(),
        total_guesses,
        average_guesses,
        min_guesses: solved.iter().map(|&(_, n)| n).min().unwrap_or(0),
        max_guesses: solved.iter().map(|&(_, n)| n).max().unwrap_or(0),
        distribution,
        worst_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
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
    fn benchmark_runs() {
        let session = session();
        let targets = session.candidates().to_vec();
        let result = run_benchmark(&session, &targets, None, false);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed, 10);
        assert!(result.solved > 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let session = session();
        let targets = session.candidates().to_vec();
        let result = run_benchmark(&session, &targets, None, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let session = session();
        let targets = pick_targets(session.candidates(), Some(4), 7);
        let forced = Word::new("pudgy").unwrap();

        let result = run_benchmark(&session, &targets, Some(&forced), false);

        assert_eq!(result.total_words, 4);
        // PUDGY is never an answer here, so nothing is solved in one
        assert!(!result.distribution.contains_key(&1));
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&session(), &[], None, false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn pick_targets_is_seeded() {
        let allow = words_from_slice(ANSWERS);

        let first = pick_targets(&allow, Some(5), 42);
        let second = pick_targets(&allow, Some(5), 42);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);

        assert_eq!(pick_targets(&allow, None, 0).len(), ANSWERS.len());
        assert_eq!(pick_targets(&allow, Some(50), 0).len(), ANSWERS.len());
    }
}
