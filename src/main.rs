//! Wordle Solver - CLI
//!
//! Wordle solver with TUI and CLI modes using constraint deduction and
//! letter-frequency guesses.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_deduce::{
    commands::{
        SolveConfig, analyze_letters, pick_targets, run_benchmark, run_simple, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_letters_result, print_solve_result},
    solver::SolverSession,
    wordlists::{DEFAULT_ALLOW_PATH, DEFAULT_DICTIONARY_PATH, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_deduce",
    about = "Wordle solver using constraint deduction and letter-frequency guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allow-list: possible answers, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_ALLOW_PATH)]
    allow: String,

    /// Dictionary: every legal guess, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Trace candidates, board and letter ranking after each round
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Play this word first
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Show letter frequencies and the best-scoring guesses
    Letters {
        /// Number of guesses to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for choosing random answers
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Override first word
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

/// Load both word lists and start a session over them
fn load_session(allow_path: &str, dictionary_path: &str) -> Result<SolverSession> {
    let allow = load_from_file(allow_path)
        .with_context(|| format!("failed to read allow-list {allow_path}"))?;
    let dictionary = load_from_file(dictionary_path)
        .with_context(|| format!("failed to read dictionary {dictionary_path}"))?;

    if allow.is_empty() {
        bail!("allow-list {allow_path} contains no valid words");
    }

    SolverSession::new(allow, dictionary)
        .with_context(|| format!("cannot start a game with dictionary {dictionary_path}"))
}

fn parse_first_word(first_word: Option<&str>) -> Result<Option<Word>> {
    first_word
        .map(|w| Word::new(w).with_context(|| format!("invalid first word {w:?}")))
        .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let session = load_session(&cli.allow, &cli.dictionary)?;
    if cli.verbose {
        eprintln!(
            "allow-list: {} words, dictionary: {} words",
            session.candidates().len(),
            session.dictionary().len()
        );
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&session, cli.verbose).context("console input failed"),
        Commands::Solve { word, first_word } => {
            let mut config = SolveConfig::new(word);
            config.first_word = parse_first_word(first_word.as_deref())?;
            let result = solve_word(config, session)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Letters { top } => {
            print_letters_result(&analyze_letters(&session, top));
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => {
            let forced_first = parse_first_word(first_word.as_deref())?;
            let targets = pick_targets(session.candidates(), count, seed);

            println!("🎯 Testing {} words...", targets.len());
            if let Some(word) = &forced_first {
                println!("Forced first word: {word}");
            }

            let result = run_benchmark(&session, &targets, forced_first.as_ref(), true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(session: SolverSession) -> Result<()> {
    use wordle_deduce::interactive::{App, run_tui};

    run_tui(App::new(session))
}
