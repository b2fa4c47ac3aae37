//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackRound, Word};
use colored::Colorize;

/// Render a guess with each letter on its feedback colour
#[must_use]
pub fn colored_guess(word: &Word, feedback: &FeedbackRound) -> String {
    word.chars()
        .iter()
        .zip(feedback.codes())
        .map(|(&letter, &code)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match code {
                Feedback::Confirmed => tile.black().on_green().bold().to_string(),
                Feedback::Misplaced => tile.black().on_yellow().bold().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the confirmed-letter board, e.g. `_ _ A _ E`
#[must_use]
pub fn board_tiles(board: &str) -> String {
    board
        .chars()
        .map(|c| {
            if c == 'X' {
                "_".to_string()
            } else {
                c.to_ascii_uppercase().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn board_tiles_marks_unknowns() {
        assert_eq!(board_tiles("XXaXe"), "_ _ A _ E");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let feedback = FeedbackRound::parse("bybgg").unwrap();
        assert_eq!(colored_guess(&word, &feedback), " C  R  A  N  E ");
    }
}
