//! How to play.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use gd_core::{Category, INSTRUCTIONS};

use crate::app::App;

/// Draw the instructions screen.
pub fn draw(frame: &mut Frame, _app: &App, area: Rect) {
    let block = Block::default()
        .title(" How to Play ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line<'static>> = INSTRUCTIONS
        .iter()
        .map(|line| Line::from(Span::raw(*line)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Categories",
        Style::default().fg(Color::Yellow).bold(),
    )));
    for category in Category::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", category.to_string()), Style::default().bold()),
            Span::raw(category.blurb()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
