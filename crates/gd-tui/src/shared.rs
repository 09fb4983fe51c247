//! Shared utilities for screens: layout helpers, the feedback log, the text
//! field, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::input::TextInput;

/// Visual style for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// A guess the Defender typed (yellow, "> " prefix).
    Command,
    /// The verdict on a guess (white).
    Result,
    /// A refused entry (red).
    Error,
    /// Level announcements and hints (cyan).
    System,
}

/// A single line in the feedback log.
#[derive(Debug, Clone)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

/// Draw the feedback log, newest line at the bottom.
pub fn draw_log(frame: &mut Frame, lines: &[OutputLine], scroll: u16, area: Rect) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text: Vec<Line> = lines
        .iter()
        .map(|line| match line.style {
            OutputStyle::Command => Line::from(Span::styled(
                format!("> {}", line.text),
                Style::default().fg(Color::Yellow),
            )),
            OutputStyle::Result => Line::from(Span::raw(line.text.clone())),
            OutputStyle::Error => Line::from(Span::styled(
                line.text.clone(),
                Style::default().fg(Color::Red),
            )),
            OutputStyle::System => Line::from(Span::styled(
                line.text.clone(),
                Style::default().fg(Color::Cyan),
            )),
        })
        .collect();

    let total = text.len() as u16;
    let top = total
        .saturating_sub(inner.height)
        .saturating_sub(scroll);
    let paragraph = Paragraph::new(text).scroll((top, 0));
    frame.render_widget(paragraph, inner);
}

/// Draw a bordered text field and place the cursor in it.
pub fn draw_input(frame: &mut Frame, input: &TextInput, masked: bool, title: &str, area: Rect) {
    let shown = if masked {
        "*".repeat(input.text().chars().count())
    } else {
        input.text().to_string()
    };
    let field = Paragraph::new(format!("> {shown}")).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(field, area);

    // 1 for the border, 2 for the "> " prefix
    let cursor_x = area.x + 1 + 2 + input.cursor() as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Menus:"),
        Line::from("  \u{2191}/\u{2193} j/k   Move selection"),
        Line::from("  Enter       Open / start"),
        Line::from("  1-4         Jump to a main menu entry"),
        Line::from("  t           Toggle hot-seat (category screen)"),
        Line::from("  Esc         Go back"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from("Attacker / Defender:"),
        Line::from("  Enter       Lock in secret / submit guess"),
        Line::from("  Tab         Show or hide the secret"),
        Line::from("  \u{2191}/\u{2193}         Scroll the log"),
        Line::from("  Esc         Abandon the run"),
        Line::from(""),
        Line::from("Game over:"),
        Line::from("  Enter / r   Play the category again"),
        Line::from("  c / h       Categories / history"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
