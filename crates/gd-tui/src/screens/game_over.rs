//! Result of a finished run.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use gd_core::Status;

use crate::app::App;
use crate::shared::centered_rect;

/// Draw the game-over screen.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };
    let area = centered_rect(70, 70, area);

    let (headline, color) = match session.status() {
        Status::ChampionOfCategory => (
            format!("CHAMPION OF {}!", session.category().to_string().to_uppercase()),
            Color::Green,
        ),
        _ => ("DEFEATED".to_string(), Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(headline, Style::default().fg(color).bold())),
        Line::from(""),
    ];

    match session.status() {
        Status::ChampionOfCategory => {
            lines.push(Line::from("The Defender cleared all 5 levels."));
        }
        _ => {
            lines.push(Line::from(format!(
                "The Attacker wins on level {}.",
                session.level()
            )));
            if let Some(secret) = session.reveal_secret() {
                lines.push(Line::from(vec![
                    Span::raw("The secret was "),
                    Span::styled(secret.to_string(), Style::default().fg(Color::Yellow).bold()),
                    Span::raw("."),
                ]));
            }
        }
    }

    if let Some(record) = session.run_record() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Levels cleared: {}   Wrong guesses: {}",
                record.levels_cleared, record.wrong_guesses
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: again  c: categories  h: history  Esc: menu",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
