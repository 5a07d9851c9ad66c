//! TUI rendering with ratatui
//!
//! Clue inputs on top, candidate list below.

use super::app::{App, Field, MessageStyle};
use crate::core::WORD_LEN;
use crate::output::formatters::{candidate_count, format_score, used_date};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Banned letters
            Constraint::Length(4), // Hints
            Constraint::Length(4), // Known letters
            Constraint::Min(8),    // Candidates
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_field(f, app, Field::Banned, " Letters not in the word ", chunks[1]);
    render_slots(
        f,
        app,
        Field::Hint,
        " Letters in the word, but not at these places ",
        chunks[2],
    );
    render_slots(
        f,
        app,
        Field::Known,
        " Letters in the word in the right place ",
        chunks[3],
    );

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Candidates
            Constraint::Percentage(35), // Messages
        ])
        .split(chunks[4]);

    render_candidates(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER")
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

fn field_block(title: &str, focused: bool, color: Color) -> Block<'_> {
    let (border_type, style) = if focused {
        (
            BorderType::Double,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(Color::DarkGray))
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type)
        .style(style)
}

fn field_color(field: Field) -> Color {
    match field {
        Field::Banned => Color::Gray,
        Field::Hint(_) => Color::Yellow,
        Field::Known(_) => Color::Green,
    }
}

fn render_field(f: &mut Frame, app: &App, field: Field, title: &str, area: Rect) {
    let color = field_color(field);
    let input = Paragraph::new(app.field_text(field).to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(field_block(title, app.focus == field, color));
    f.render_widget(input, area);
}

fn render_slots(
    f: &mut Frame,
    app: &App,
    slot: fn(usize) -> Field,
    title: &str,
    area: Rect,
) {
    // Title on its own line, one bordered box per position below it
    let outer = Block::default().title(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, WORD_LEN as u32); WORD_LEN])
        .split(inner);

    for (position, &slot_area) in slots.iter().enumerate() {
        let field = slot(position);
        let label = format!(" {} ", position + 1);
        let color = field_color(field);
        let input = Paragraph::new(app.field_text(field).to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(field_block(&label, app.focus == field, color));
        f.render_widget(input, slot_area);
    }
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let today = session.today();
    let candidates = session.candidates();

    let items: Vec<ListItem> = candidates
        .iter()
        .skip(app.scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let used = entry.candidate.is_past_used(today);
            let word_style = if used {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![
                Span::raw(" "),
                Span::styled(entry.candidate.word.text().to_string(), word_style),
            ];
            if let Some(score) = entry.score {
                spans.push(Span::styled(
                    format!("  {:>5}", format_score(score)),
                    Style::default().fg(Color::Cyan),
                ));
            }
            if let Some(date) = used_date(entry.candidate, today) {
                spans.push(Span::styled(
                    format!("  📅 {date}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        " Possible Solutions ({}){} ",
        candidate_count(session.unused_count(), candidates.len()),
        if session.is_ranked() { " ranked" } else { "" }
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
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
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let dictionary = Paragraph::new(format!("Words: {}", app.dictionary_label))
        .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let today = Paragraph::new(format!("Today: {}", app.session.today()))
        .alignment(Alignment::Center);
    f.render_widget(today, chunks[1]);

    let help = Paragraph::new("Tab: Next field | ^R: Rank | ^X: Reset | ↑↓: Scroll | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
