//! Title and top-level menu.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, MENU_ITEMS};
use crate::shared::centered_rect;

const BANNER: [&str; 3] = [
    "+-----------------------------+",
    "|   G U E S S   D U E L       |",
    "+-----------------------------+",
];

/// Draw the main menu.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(60, 80, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan).bold())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Hide a number. Hunt it down.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let label = format!(" {}. {item} ", i + 1);
        let style = if i == app.menu_index {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    if !app.history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Runs this session: {}  Championships: {}",
                app.history.len(),
                app.history.champion_count()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
