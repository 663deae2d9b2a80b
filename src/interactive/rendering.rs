//! TUI rendering with ratatui
//!
//! Board, keyboard and game-over overlay for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KeyStatus, KeyboardLayout, LetterFeedback, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.input_mode == InputMode::GameOver {
        render_overlay(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Absent => Style::new().fg(Color::DarkGray),
        KeyStatus::Unknown => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for row in 0..session.max_attempts() {
        let spans: Vec<Span> = if let Some((guess, feedback)) = session.history().get(row) {
            guess
                .text()
                .chars()
                .zip(feedback.iter())
                .flat_map(|(letter, status)| tile(letter, feedback_style(status)))
                .collect()
        } else if row == session.history().len() && !session.is_over() {
            let typed: Vec<char> = session.current_row().chars().collect();
            let style = if app.invalid_row {
                Style::new().fg(Color::White).bg(Color::Red)
            } else {
                Style::new().fg(Color::White).bg(Color::Blue)
            };
            (0..WORD_LENGTH)
                .flat_map(|i| match typed.get(i) {
                    Some(&letter) => tile(letter, style.add_modifier(Modifier::BOLD)),
                    None => tile('_', Style::new().fg(Color::Gray)),
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| tile('·', Style::new().fg(Color::DarkGray)))
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let rows = KeyboardLayout::for_width(area.width).rows();
    let mut lines = Vec::with_capacity(rows.len() * 2);

    for row in rows {
        let spans: Vec<Span> = row
            .bytes()
            .flat_map(|b| tile(char::from(b), key_style(keyboard.status(b))))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

    let attempt_text = format!(
        "Guess: {}/{}",
        (app.session.attempt_index() + 1).min(app.session.max_attempts()),
        app.session.max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!("Streak: {}", app.stats.current_streak);
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "Enter: Submit | Bksp: Delete | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_overlay(f: &mut Frame, app: &App) {
    let Some(outcome) = app.session.outcome() else {
        return;
    };

    let area = centered_rect(50, 40, f.area());
    let (title, color) = if outcome.won {
        (" 🎉 CONGRATULATIONS! 🎉 ", Color::Green)
    } else {
        (" Out of guesses ", Color::Red)
    };

    let answer_spans: Vec<Span> = outcome
        .answer
        .text()
        .chars()
        .flat_map(|letter| {
            let style = if outcome.won {
                feedback_style(LetterFeedback::Correct)
            } else {
                Style::new().fg(Color::Black).bg(Color::White)
            };
            tile(letter, style)
        })
        .collect();

    let summary = if outcome.won {
        format!(
            "Solved in {} {}",
            outcome.attempts,
            if outcome.attempts == 1 { "guess" } else { "guesses" }
        )
    } else {
        "The word was".to_string()
    };

    let content = vec![
        Line::from(""),
        Line::from(summary),
        Line::from(""),
        Line::from(answer_spans),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'n' to play again or 'q' to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
