//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::{FeedbackRound, SolverError, Word};
use crate::output::{print_round, trace_round, trace_suggestion};
use crate::solver::{SessionState, SolverSession};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// `fresh` is the session each new game starts from.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(fresh: &SolverSession, verbose: bool) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that cover the most common unknown letters.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - g for green (correct position)");
    println!("  - y for yellow (wrong position)");
    println!("  - b for black/gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let mut session = fresh.clone();
    let mut undo_stack: Vec<SolverSession> = Vec::new();
    let mut history: Vec<(Word, FeedbackRound)> = Vec::new();

    loop {
        let turn = session.round() + 1;

        let suggestion = match session.next_guess() {
            Ok(suggestion) => suggestion,
            Err(SolverError::NoCandidatesRemain) => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match get_user_input("Command")?.to_lowercase().as_str() {
                    "undo" | "u" => {
                        if let Some(previous) = undo_stack.pop() {
                            session = previous;
                            history.pop();
                            println!("✓ Undone! Back to turn {}\n", session.round() + 1);
                        }
                    }
                    "new" | "n" => {
                        session = fresh.clone();
                        undo_stack.clear();
                        history.clear();
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" | "" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            Err(err) => {
                println!("❌ {err}");
                return Ok(());
            }
        };

        if verbose {
            trace_suggestion(&suggestion, &session);
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining",
            session.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");

        if suggestion.solved {
            println!(
                "\n🎯 The answer must be: {}\n",
                suggestion.word.text().to_uppercase().bright_green().bold()
            );
        } else {
            println!(
                "\n📊 Suggested guess: {}",
                suggestion.word.text().to_uppercase().bright_yellow().bold()
            );
            if let Some(score) = suggestion.score {
                println!("   Letter score:     {score}");
            }
            println!();
        }

        if session.candidates().len() <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter feedback (b/y/g, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" | "" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session = fresh.clone();
                    undo_stack.clear();
                    history.clear();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if let Some(previous) = undo_stack.pop() {
                        session = previous;
                        history.pop();
                        println!("✓ Undone! Back to turn {}\n", session.round() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => break Some(FeedbackRound::SOLVED),
                _ => match FeedbackRound::parse(&input) {
                    Ok(feedback) => break Some(feedback),
                    Err(err) => println!("❌ {err}\n"),
                },
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        history.push((suggestion.word.clone(), feedback));

        if feedback.is_solved() {
            print_victory(&history);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = fresh.clone();
                    undo_stack.clear();
                    history.clear();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        undo_stack.push(session.clone());
        let summary = session.apply_round(&suggestion.word, feedback);
        if verbose {
            trace_round(&summary, &session);
        }
        if summary.state == SessionState::Solved {
            println!("✓ Only one word fits the feedback.\n");
        }
    }
}

fn print_victory(history: &[(Word, FeedbackRound)]) {
    let turn = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (word, feedback) in history {
        print_round(word, feedback);
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
