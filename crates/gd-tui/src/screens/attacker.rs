//! The Attacker types the secret for the level (hot-seat).

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::shared::{draw_input, draw_log};

/// Draw the secret-entry screen.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Prompt
            Constraint::Min(3),    // Log
            Constraint::Length(3), // Input
        ])
        .split(area);

    let range = session.range();
    let prompt = vec![
        Line::from(Span::styled(
            format!("Level {}/5", session.level()),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(format!(
            "Attacker, choose a secret between {} and {}.",
            range.min, range.max
        )),
        Line::from(Span::styled(
            "Defender, look away!",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default()
        .title(" Attacker ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(Paragraph::new(prompt).block(block), chunks[0]);

    draw_log(frame, &app.log, app.log_scroll, chunks[1]);

    let title = if app.show_secret {
        "Secret (Tab to hide)"
    } else {
        "Secret (Tab to show)"
    };
    draw_input(frame, &app.input, !app.show_secret, title, chunks[2]);
}
