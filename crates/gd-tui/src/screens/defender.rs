//! The Defender's guessing screen: level header, HP bar, hint panel, log, and
//! the guess field.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use gd_core::hint::{HINT_MIN_LEVEL, HINT_MIN_WRONG_GUESSES};
use gd_core::{Cue, HitPoints, Session};

use crate::app::App;
use crate::shared::{draw_input, draw_log};

/// Draw the guessing screen.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Level + HP
            Constraint::Min(3),    // Log + hint
            Constraint::Length(3), // Input
        ])
        .split(area);

    draw_header(frame, app, session, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(rows[1]);
    draw_log(frame, &app.log, app.log_scroll, middle[0]);
    draw_hint_panel(frame, session, middle[1]);

    let range = session.range();
    let title = format!("Guess {}-{}", range.min, range.max);
    draw_input(frame, &app.input, false, &title, rows[2]);
}

/// Level, range, and HP gauge.
fn draw_header(frame: &mut Frame, app: &App, session: &Session, area: Rect) {
    let border = match app.last_cue {
        Some(Cue::WrongGuess) => Color::Red,
        Some(Cue::CorrectGuess | Cue::LevelCleared) => Color::Green,
        _ => Color::Blue,
    };
    let block = Block::default()
        .title(format!(" {} | Level {}/5 ", session.category(), session.level()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }
    let range = session.range();
    let info = Paragraph::new(Line::from(vec![
        Span::styled("Range: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} to {}", range.min, range.max),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled("   Misses: ", Style::default().fg(Color::DarkGray)),
        Span::raw(session.wrong_guesses().to_string()),
    ]));
    frame.render_widget(info, Rect::new(inner.x, inner.y, inner.width, 1));

    let gauge_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(hp_gauge(session.hp()), gauge_row);
}

/// Red below a third, yellow below two thirds, green otherwise.
fn hp_gauge(hp: HitPoints) -> Gauge<'static> {
    let fraction = hp.fraction();
    let color = if fraction < 0.34 {
        Color::Red
    } else if fraction < 0.67 {
        Color::Yellow
    } else {
        Color::Green
    };
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(fraction.clamp(0.0, 1.0))
        .label(Span::styled(hp.to_string(), Style::default().fg(Color::White)))
}

fn draw_hint_panel(frame: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default()
        .title(" Hint ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let line = match session.current_hint() {
        Some(hint) => Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::Magenta).bold(),
        )),
        None if session.level().get() < HINT_MIN_LEVEL => Line::from(Span::styled(
            format!("Hints start on level {HINT_MIN_LEVEL}"),
            Style::default().fg(Color::DarkGray),
        )),
        None => {
            let left = HINT_MIN_WRONG_GUESSES.saturating_sub(session.wrong_guesses());
            Line::from(Span::styled(
                format!("Unlocks after {left} more miss{}", if left == 1 { "" } else { "es" }),
                Style::default().fg(Color::DarkGray),
            ))
        }
    };

    let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
