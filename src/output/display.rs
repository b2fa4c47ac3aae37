//! Display functions for command results

use super::formatters::{board_tiles, colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, LettersResult, SolveResult};
use crate::core::{FeedbackRound, Word};
use crate::solver::{RoundSummary, SolverSession, Suggestion};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let tiles = Word::new(step.word.as_str())
            .map_or_else(|_| step.word.to_uppercase(), |w| colored_guess(&w, &step.feedback));
        println!("\nTurn {turn}: {tiles} {}", step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Score:      {score}");
            }
            println!("  Board:      {}", board_tiles(&step.board));
            if step.deductions > 0 {
                println!("  Deduced:    {} position(s)", step.deductions);
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the letter histogram and best guesses
pub fn print_letters_result(result: &LettersResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} candidates ",
        "LETTER FREQUENCY:".bright_cyan().bold(),
        result.candidates.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max = result
        .ranked_letters
        .first()
        .map_or(0, |&(_, count)| count);
    println!();
    for &(letter, count) in result.ranked_letters.iter().filter(|(_, c)| *c > 0) {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!(
            "   {}  [{}] {count}",
            letter.to_ascii_uppercase().to_string().bold(),
            bar.green()
        );
    }

    println!("\n📊 {}", "Best guesses:".bright_cyan().bold());
    for (i, (word, score)) in result.top_guesses.iter().enumerate() {
        println!(
            "   {:>2}. {} {}",
            i + 1,
            word.to_uppercase().bright_white().bold(),
            score.to_string().bright_yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=6 {
            if let Some(&count) = result.distribution.get(&guess_count) {
                let pct = (count as f64 / result.solved as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░"
                        .repeat(40_usize.saturating_sub(bar_width))
                        .bright_black()
                );
                println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }

    if !result.worst_words.is_empty() {
        println!("\n⚠️  {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} ({guesses})", word.to_uppercase());
        }
    }
}

/// Trace the state after a round to stderr
///
/// Mirrors what a developer needs when feedback goes wrong: the candidate
/// count, the confirmed board, and the words left when only a few remain.
pub fn trace_round(summary: &RoundSummary, session: &SolverSession) {
    eprintln!(
        "{} {} {} → {} candidates, board {}{}",
        "trace".bright_black(),
        summary.guess.text(),
        summary.feedback,
        summary.candidates_after,
        session.model().board(),
        if summary.deductions > 0 {
            format!(" ({} deduced)", summary.deductions)
        } else {
            String::new()
        }
    );
    if !summary.present.is_empty() {
        eprintln!(
            "{} present letters: {}",
            "trace".bright_black(),
            summary.present
        );
    }
}

/// Trace the letter ranking behind a suggestion to stderr
pub fn trace_suggestion(suggestion: &Suggestion, session: &SolverSession) {
    let candidates = session.candidates();
    if !suggestion.solved {
        let ranked = session
            .histogram()
            .ranked()
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(letter, count)| format!("{letter}: {count}"))
            .collect::<Vec<_>>()
            .join("; ");
        eprintln!("{} letters {ranked}", "trace".bright_black());
        if let Some(score) = suggestion.score {
            eprintln!("{} best score: {score}", "trace".bright_black());
        }
    }
    if candidates.len() < 10 {
        for word in candidates {
            eprintln!("{} maybe: {word}", "trace".bright_black());
        }
    }
}

/// Print one round as coloured tiles
pub fn print_round(guess: &Word, feedback: &FeedbackRound) {
    println!("   {}  {}", colored_guess(guess, feedback), feedback.to_emoji());
}
