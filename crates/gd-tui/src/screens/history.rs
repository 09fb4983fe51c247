//! Recent runs.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use gd_core::{Ending, History};

use crate::app::App;

/// Draw the last runs, newest first.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Game History (last {}) ", History::RECENT))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if app.history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No game history found",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .recent(History::RECENT)
        .iter()
        .rev()
        .map(|record| {
            let color = match record.ending {
                Ending::Champion => Color::Green,
                Ending::Defeated { .. } => Color::Red,
            };
            ListItem::new(Span::styled(record.to_string(), Style::default().fg(color)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
