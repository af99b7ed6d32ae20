//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Overlay, SETTINGS_ITEMS};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::keyboard::KeyboardState;
use crate::output::formatters::{
    HELP_LINES, KEYBOARD_ROWS, distribution_percent, verdict_legend, verdict_rgb,
};
use crate::settings::Settings;
use crate::stats::Statistics;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Terminal color of a verdict in the current palette
fn verdict_color(verdict: Option<Verdict>, settings: Settings) -> Color {
    let (r, g, b) = verdict_rgb(verdict, settings.high_contrast, settings.dark_theme);
    Color::Rgb(r, g, b)
}

/// Foreground/background for the whole screen
fn base_style(settings: Settings) -> Style {
    if settings.dark_theme {
        Style::default().fg(Color::White).bg(Color::Rgb(18, 18, 19))
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    }
}

/// Style of a board tile or keyboard key
fn tile_style(verdict: Option<Verdict>, settings: Settings) -> Style {
    match verdict {
        Some(_) => Style::default()
            .fg(Color::White)
            .bg(verdict_color(verdict, settings))
            .add_modifier(Modifier::BOLD),
        None => base_style(settings).add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: char, verdict: Option<Verdict>, settings: Settings) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(verdict, settings),
    )
}

/// Board lines: committed rows, the guess being composed, then empty rows
fn board_lines(session: &GameSession, settings: Settings) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in session.rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &verdict) in row.guess().text().chars().zip(row.evaluation().verdicts()) {
            spans.push(tile(letter, Some(verdict), settings));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let empty_style = Style::default().fg(verdict_color(None, settings));
    for i in session.row_index()..MAX_ATTEMPTS {
        let composing = i == session.row_index() && session.status() == GameStatus::InProgress;
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for position in 0..WORD_LENGTH {
            match session.buffer().chars().nth(position).filter(|_| composing) {
                Some(letter) => spans.push(tile(letter, None, settings)),
                None => spans.push(Span::styled(" · ", empty_style)),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn keyboard_lines(keyboard: &KeyboardState, settings: Settings) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        tile(char::from(letter), keyboard.state_of(letter), settings),
                        Span::raw(" "),
                    ]
                })
                .collect();
            if row.starts_with('z') {
                spans.insert(0, Span::styled("ENTER ", base_style(settings)));
                spans.push(Span::styled("DEL", base_style(settings)));
            }
            Line::from(spans)
        })
        .collect()
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let settings = app.settings();
    f.render_widget(Block::default().style(base_style(settings)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, settings, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app.game.session(), settings, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app.game.session().keyboard(), settings, chunks[2]);
    render_status(f, app.game.statistics(), chunks[3]);

    match app.overlay {
        Overlay::None => {}
        Overlay::Help => render_help_overlay(f, settings),
        Overlay::Statistics => render_statistics_overlay(f, app.game.statistics(), settings),
        Overlay::Settings { selected } => render_settings_overlay(f, settings, selected),
    }
}

fn render_header(f: &mut Frame, settings: Settings, area: Rect) {
    let mut title = vec![Span::styled(
        "WORDLE",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if settings.hard_mode {
        title.push(Span::styled(
            "  [hard mode]",
            Style::default().fg(verdict_color(Some(Verdict::Present), settings)),
        ));
    }

    let header = Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, session: &GameSession, settings: Settings, area: Rect) {
    let board = Paragraph::new(board_lines(session, settings))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, settings: Settings, area: Rect) {
    let keys = Paragraph::new(keyboard_lines(keyboard, settings))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keys, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default(),
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

fn render_status(f: &mut Frame, stats: &Statistics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Played: {} | Win %: {:.0} | Streak: {}",
        stats.games_played(),
        stats.win_percentage(),
        stats.current_streak()
    );
    let summary = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(summary, chunks[0]);

    let help = Paragraph::new("F1: Help | F2: Stats | F3: Settings | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn overlay_block(title: &'static str, settings: Settings) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(base_style(settings))
}

fn render_help_overlay(f: &mut Frame, settings: Settings) {
    let popup_area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, popup_area);
    f.render_widget(overlay_block(" How to play ", settings), popup_area);

    let mut lines: Vec<Line> = HELP_LINES.iter().map(|&line| Line::from(line)).collect();
    lines.push(Line::from(""));
    for verdict in [Verdict::Correct, Verdict::Present, Verdict::Absent] {
        lines.push(Line::from(vec![
            tile('w', Some(verdict), settings),
            Span::raw(" "),
            Span::raw(verdict_legend(verdict, settings.high_contrast)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Esc to close"));

    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(text, popup_area.inner(Margin::new(2, 1)));
}

fn render_statistics_overlay(f: &mut Frame, stats: &Statistics, settings: Settings) {
    let popup_area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup_area);
    f.render_widget(overlay_block(" Statistics ", settings), popup_area);
    let inner = popup_area.inner(Margin::new(2, 1));

    let mut lines = vec![
        Line::from(format!(
            "{:^8}{:^8}{:^8}{:^10}{:^10}",
            stats.games_played(),
            stats.games_won(),
            format!("{:.0}", stats.win_percentage()),
            stats.current_streak(),
            stats.max_streak()
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!(
            "{:^8}{:^8}{:^8}{:^10}{:^10}",
            "Played", "Won", "Win %", "Streak", "Max"
        )),
        Line::from(""),
        Line::from("Guess Distribution").style(Style::default().add_modifier(Modifier::BOLD)),
    ];

    let bars = stats.distribution();
    let tallest = bars.iter().map(|bar| bar.count).max().unwrap_or(0);
    let max_width = usize::from(inner.width.saturating_sub(8));
    for bar in bars {
        let width = usize::from(distribution_percent(bar.count, tallest)) * max_width / 100;
        let color = if bar.highlight {
            verdict_color(Some(Verdict::Correct), settings)
        } else {
            verdict_color(Some(Verdict::Absent), settings)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", bar.row)),
            Span::styled(
                format!("{}{}", " ".repeat(width), bar.count),
                Style::default().fg(Color::White).bg(color),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("n: New game (when finished) | Esc to close"));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_settings_overlay(f: &mut Frame, settings: Settings, selected: usize) {
    let popup_area = centered_rect(70, 50, f.area());
    f.render_widget(Clear, popup_area);
    f.render_widget(overlay_block(" Settings ", settings), popup_area);

    let values = [settings.hard_mode, settings.dark_theme, settings.high_contrast];
    let mut lines = Vec::with_capacity(SETTINGS_ITEMS.len() * 3 + 2);
    for (i, ((title, description), enabled)) in SETTINGS_ITEMS.iter().zip(values).enumerate() {
        let marker = if i == selected { "> " } else { "  " };
        let toggle = if enabled { "[x]" } else { "[ ]" };
        let style = if i == selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{toggle} {title}"), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {description}"),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Up/Down to select | Enter to toggle | Esc to close"));

    f.render_widget(Paragraph::new(lines), popup_area.inner(Margin::new(2, 1)));
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn high_contrast_tiles() {
        let normal = Settings::default();
        let contrast = Settings {
            high_contrast: true,
            ..Settings::default()
        };
        assert_eq!(
            tile_style(Some(Verdict::Correct), normal).bg,
            Some(Color::Rgb(106, 170, 100))
        );
        assert_eq!(
            tile_style(Some(Verdict::Correct), contrast).bg,
            Some(Color::Rgb(245, 121, 58))
        );
    }

    #[test]
    fn board_shows_rows_buffer_and_blanks() {
        let mut session =
            GameSession::restore(Word::new("crane").unwrap(), words_from_slice(&["trace"]))
                .unwrap();
        session.append_letter('c');
        session.append_letter('r');

        let lines = board_lines(&session, Settings::default());
        // Each row is followed by a spacer line
        assert_eq!(lines.len(), MAX_ATTEMPTS * 2);
        assert_eq!(line_text(&lines[0]), " T   R   A   C   E  ");
        assert_eq!(line_text(&lines[2]), " C   R   ·   ·   ·  ");
        assert_eq!(line_text(&lines[4]), " ·   ·   ·   ·   ·  ");
    }

    #[test]
    fn keyboard_marks_used_letters() {
        let secret = Word::new("crane").unwrap();
        let keyboard = KeyboardState::replay([(
            &Word::new("trace").unwrap(),
            &crate::core::Evaluation::calculate(&Word::new("trace").unwrap(), &secret),
        )]);

        let lines = keyboard_lines(&keyboard, Settings::default());
        assert_eq!(lines.len(), 3);

        let r_key = lines[0]
            .spans
            .iter()
            .find(|span| span.content == " R ")
            .unwrap();
        assert_eq!(
            r_key.style.bg,
            Some(verdict_color(Some(Verdict::Correct), Settings::default()))
        );
        assert!(line_text(&lines[2]).starts_with("ENTER"));
    }
}
