//! Wordle Solver
//!
//! A Wordle solver that tracks per-position letter constraints, deduces
//! forced letter positions, and picks guesses by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_deduce::core::Word;
//! use wordle_deduce::solver::SolverSession;
//!
//! let words: Vec<Word> = ["brake", "share", "spare", "glare", "crate"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut session = SolverSession::new(words.clone(), words).unwrap();
//!
//! let guess = session.next_guess().unwrap();
//! assert_eq!(guess.word.text(), "share");
//!
//! session.apply_feedback("share", "gbggg").unwrap();
//! let answer = session.next_guess().unwrap();
//! assert!(answer.solved);
//! assert_eq!(answer.word.text(), "spare");
//! ```

// Core domain types
pub mod core;

// Constraint model, deduction and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
