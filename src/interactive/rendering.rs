//! TUI rendering with ratatui
//!
//! Layout for the word finder: input box, grouped results, message log and
//! a status bar with dictionary stats.

use super::app::{App, MessageStyle, Mode, Results};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD FINDER - Interactive Mode")
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.mode {
        Mode::Unscramble => (" Letters ('?' = blank) | TAB for pattern mode ", Color::Yellow),
        Mode::Pattern => (" Pattern ('?' = any letter) | TAB for unscramble mode ", Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
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

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Results ({}) ", app.results.total());

    let content: Vec<Line> = if let Some(err) = &app.error {
        vec![Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        ))]
    } else {
        match &app.results {
            Results::Empty if app.input_buffer.is_empty() => {
                vec![Line::from("Start typing to search the dictionary")]
            }
            Results::Empty => vec![Line::from("No words found")],
            Results::Words { groups, .. } if groups.is_empty() => {
                vec![Line::from("No words can be made from these letters")]
            }
            Results::Words { groups, .. } => {
                let mut lines = Vec::new();
                for (len, words) in groups {
                    lines.push(Line::from(Span::styled(
                        format!("{len} letters ({})", words.len()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                    let spans: Vec<Span> = words
                        .iter()
                        .flat_map(|w| {
                            [
                                Span::styled(
                                    w.word.to_uppercase(),
                                    Style::default().fg(Color::Yellow),
                                ),
                                Span::styled(
                                    format!(" {}  ", w.score),
                                    Style::default().fg(Color::DarkGray),
                                ),
                            ]
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                lines
            }
            Results::Matches { shown, .. } if shown.is_empty() => {
                vec![Line::from("No words match this pattern")]
            }
            Results::Matches { shown, .. } => vec![Line::from(
                shown
                    .iter()
                    .map(|w| Span::raw(format!("{}  ", w.to_uppercase())))
                    .collect::<Vec<_>>(),
            )],
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_tile_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tile_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.input_buffer.len();
    let max = app.limits.max_letters.max(1);
    // Cast is safe: clamped to 100
    let percent = ((used * 100) / max).min(100) as u16;
    let color = if used > max { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tiles ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
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
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let dictionary_text = if app.stats.loaded {
        format!("Dictionary: {} words", app.stats.total_words)
    } else {
        "Dictionary: unavailable".to_string()
    };
    let dictionary = Paragraph::new(dictionary_text).alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[1]);

    let help = Paragraph::new("Esc: Clear/Quit | Enter: Log | TAB: Mode")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
