//! Pick a category and opponent.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use gd_core::{Category, Level};

use crate::app::App;

/// Draw the category list with each category's range span and HP.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Choose a Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let table = &app.config.table;
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let first = table.rules(category, Level::FIRST);
        let last = table.rules(category, Level::FINAL);
        let selected = i == app.category_index;
        let marker = if selected { "\u{25b6} " } else { "  " };
        let name_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White).bold()
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!(" {category} "), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", category.blurb()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "    Level 1: {}  ->  Level 5: {}   HP {}",
                first.range, last.range, first.starting_hp
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let opponent = if app.hot_seat {
        "Hot-seat: a second player types each secret"
    } else {
        "Computer: secrets are drawn at random"
    };
    lines.push(Line::from(vec![
        Span::styled("Attacker: ", Style::default().fg(Color::DarkGray)),
        Span::styled(opponent, Style::default().fg(Color::Green)),
        Span::styled("  (t to toggle)", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
