//! TUI application state and logic

use crate::core::{FeedbackRound, SolverError, WORD_LEN, Word};
use crate::solver::{SessionState, SolverSession, Suggestion};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fmt::Write as _;
use std::io;

/// Application state
pub struct App {
    fresh: SolverSession,
    pub session: SolverSession,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<Suggestion>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
    pub undo_stack: Vec<SolverSession>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: FeedbackRound,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub deductions: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new(session: SolverSession) -> Self {
        Self {
            fresh: session.clone(),
            session,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest guesses covering the most common letters."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as b/y/g per letter (e.g. 'bybgg')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
            undo_stack: Vec::new(),
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.next_guess() {
            Ok(suggestion) => self.current_guess = Some(suggestion),
            Err(err) => {
                self.current_guess = None;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match FeedbackRound::parse(input.trim()) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        let Some(guess) = self.current_guess.as_ref().map(|s| s.word.clone()) else {
            self.input_buffer.clear();
            return;
        };

        self.undo_stack.push(self.session.clone());
        let summary = self.session.apply_round(&guess, feedback);
        self.history.push(HistoryEntry {
            guess,
            feedback,
            candidates_before: summary.candidates_before,
            candidates_after: summary.candidates_after,
            deductions: summary.deductions,
        });
        self.input_buffer.clear();

        if feedback.is_solved() {
            self.stats.games_won += 1;
            self.stats.total_games += 1;
            let guess_count = self.history.len();
            if guess_count <= 6 {
                self.stats.guess_distribution[guess_count] += 1;
            }

            self.input_mode = InputMode::WinCelebration;

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            return;
        }

        match summary.state {
            SessionState::Exhausted => {
                self.current_guess = None;
                self.add_message(
                    &format!("{} Press 'u' to undo.", SolverError::NoCandidatesRemain),
                    MessageStyle::Error,
                );
            }
            SessionState::Solved | SessionState::Active => {
                self.compute_suggestion();
                let mut text = format!("{} candidates remaining", summary.candidates_after);
                if summary.deductions > 0 {
                    let _ = write!(text, " ({} deduced)", summary.deductions);
                }
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = self.fresh.clone();
        self.history.clear();
        self.undo_stack.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.session = previous;
            self.history.pop();
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    pub fn use_manual_word(&mut self) {
        let word = match Word::new(self.manual_word.as_str()) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if !self.session.dictionary().contains(&word) {
            self.add_message(
                &format!("Word '{}' not in dictionary!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let score = self.session.histogram().score(&word);
        if let Some(suggested) = self.current_guess.as_ref().and_then(|s| s.score)
            && score < suggested
        {
            self.add_message(
                &format!("Note: suggested word scored {suggested} ({} more)", suggested - score),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!("Using: {} (score {score})", word.text().to_uppercase()),
            MessageStyle::Success,
        );
        self.current_guess = Some(Suggestion {
            word,
            solved: false,
            score: Some(score),
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Tab if app.candidates_count() > 0 => {
                        app.input_mode = InputMode::ManualWord;
                        app.add_message("Enter your own word", MessageStyle::Info);
                    }
                    KeyCode::Char(c @ ('b' | 'y' | 'g')) if app.input_buffer.len() < WORD_LEN => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                        app.add_message("Cancelled manual word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c)
                        if app.manual_word.len() < WORD_LEN && c.is_ascii_alphabetic() =>
                    {
                        app.manual_word.push(c.to_ascii_lowercase());
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => app.use_manual_word(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App {
        let allow = words_from_slice(&["brake", "share", "spare", "glare", "crate"]);
        let mut app = App::new(SolverSession::new(allow.clone(), allow).unwrap());
        app.compute_suggestion();
        app
    }

    #[test]
    fn feedback_advances_the_game() {
        let mut app = app();
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "share");

        app.handle_feedback("gbggg");

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.candidates_count(), 1);
        assert!(app.current_guess.as_ref().unwrap().solved);
    }

    #[test]
    fn invalid_feedback_is_reported() {
        let mut app = app();
        app.handle_feedback("gbxgg");

        assert!(app.history.is_empty());
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn win_updates_stats() {
        let mut app = app();
        app.handle_feedback("ggggg");

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn undo_restores_candidates() {
        let mut app = app();
        app.handle_feedback("gbggg");
        app.undo_last();

        assert!(app.history.is_empty());
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn contradiction_clears_suggestion() {
        let mut app = app();
        app.handle_feedback("bbbbb");

        assert_eq!(app.candidates_count(), 0);
        assert!(app.current_guess.is_none());
    }

    #[test]
    fn feedback_without_guess_clears_input() {
        let mut app = app();
        app.handle_feedback("bbbbb");
        assert!(app.current_guess.is_none());

        app.input_buffer = "gbggg".to_string();
        let input = app.input_buffer.clone();
        app.handle_feedback(&input);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn manual_word_must_be_in_dictionary() {
        let mut app = app();
        app.manual_word = "zesty".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "share");

        app.manual_word = "glare".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "glare");
        assert!(app.manual_word.is_empty());
    }
}
