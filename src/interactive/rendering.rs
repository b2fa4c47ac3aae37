//! TUI rendering with ratatui
//!
//! Suggestion, constraint board, candidates and history panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, WORD_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = &app.current_guess else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let label = if guess.solved { "Answer:    " } else { "Suggested: " };
    let mut content = vec![Line::from(vec![
        Span::raw(label),
        Span::styled(
            guess.word.text().to_uppercase(),
            Style::default()
                .fg(if guess.solved {
                    Color::Green
                } else {
                    Color::Yellow
                })
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(score) = guess.score {
        content.push(Line::from(format!("Score:     {score}")));
    }
    content.push(Line::from(""));
    content.push(board_line(app));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Confirmed letters as green tiles, unknown slots as grey
fn board_line(app: &App) -> Line<'static> {
    let model = app.session.model();
    let mut spans = vec![Span::raw("Board:     ")];
    for i in 0..WORD_LEN {
        let span = match model.possible_at(i).pinned_char() {
            Some(c) => Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if candidates.len() <= 12 {
        let histogram = app.session.histogram();
        candidates
            .iter()
            .map(|candidate| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<5}", candidate.text().to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(" {}", histogram.score(candidate)),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    } else {
        vec![Line::from(format!(
            "{} candidates remaining",
            candidates.len()
        ))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(6)
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", app.history.len() - i))];
            for (&letter, &code) in entry.guess.chars().iter().zip(entry.feedback.codes()) {
                let bg = match code {
                    Feedback::Confirmed => Color::Green,
                    Feedback::Misplaced => Color::Yellow,
                    Feedback::Absent => Color::DarkGray,
                };
                spans.push(Span::styled(
                    format!(" {} ", char::from(letter).to_ascii_uppercase()),
                    Style::default().fg(Color::Black).bg(bg),
                ));
            }
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            if entry.deductions > 0 {
                spans.push(Span::styled(
                    format!(" +{} deduced", entry.deductions),
                    Style::default().fg(Color::Cyan),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let ranked = app.session.histogram().ranked();
    let max = ranked.first().map_or(0, |&(_, count)| count).max(1);

    let lines: Vec<Line> = ranked
        .iter()
        .filter(|&&(_, count)| count > 0)
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|&(letter, count)| {
            let width = (count * 20 / max) as usize;
            Line::from(vec![
                Span::styled(
                    format!("{} ", letter.to_ascii_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█".repeat(width), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letter Frequency ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (g=green y=yellow b=gray) | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("State: {}", app.session.state())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.candidates_count() == 0 && !app.history.is_empty() {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Word"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
