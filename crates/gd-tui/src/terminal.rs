//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use crate::app::App;
use crate::screens::{self, InputMode};

/// Launch the TUI application.
pub fn run(mut app: App) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;
    info!("tui started");

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    info!(runs = app.history.len(), "tui stopped");

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        // The next draw lays out against the new size.
        Event::Resize(width, height) => debug!(width, height, "terminal resized"),
        _ => {}
    }
}

/// Handle keyboard input with mode-aware global keys.
fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.input_mode() {
        InputMode::Navigate => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') => app.show_help = !app.show_help,
            KeyCode::Esc if app.show_help => app.show_help = false,
            _ => app.handle_key(key),
        },
        InputMode::TextInput => {
            // Typed characters belong to the field; only Esc or '?' close help
            if app.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                app.show_help = false;
                return;
            }
            app.handle_key(key);
        }
    }
}

/// Handle mouse events.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        _ => {}
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    screens::draw_title_bar(frame, app, chunks[0]);
    screens::draw(frame, app, chunks[1]);

    let status = Paragraph::new(app.screen.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::Screen;
    use gd_core::GameConfig;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn q_quits_from_menus_only() {
        let mut app = App::new(GameConfig::default().with_seed(1), false);
        app.start_run(gd_core::Category::Easy);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "q");

        let mut app = App::new(GameConfig::default(), false);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::new(GameConfig::default().with_seed(1), false);
        app.start_run(gd_core::Category::Hard);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_toggles_in_navigation_mode() {
        let mut app = App::new(GameConfig::default(), false);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert_eq!(app.screen, Screen::MainMenu);
    }

    #[test]
    fn resize_changes_nothing() {
        let mut app = App::new(GameConfig::default(), false);
        handle_event(&mut app, Event::Resize(40, 12));
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(!app.should_quit);
    }
}
