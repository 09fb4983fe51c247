//! Screen identifiers, routing metadata, and per-screen drawing.

pub mod attacker;
pub mod category_select;
pub mod defender;
pub mod game_over;
pub mod history;
pub mod instructions;
pub mod main_menu;

use ratatui::prelude::*;

use gd_core::Status;

use crate::app::App;

/// Identifies which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title and top-level menu.
    MainMenu,
    /// How to play.
    Instructions,
    /// Pick a category and opponent.
    CategorySelect,
    /// The Attacker types the secret (hot-seat).
    Attacker,
    /// The Defender guesses.
    Defender,
    /// Result of a finished run.
    GameOver,
    /// Recent runs.
    History,
}

/// Whether a screen consumes typed characters or uses single-key commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands; `q` and `?` are global.
    Navigate,
    /// The screen has a text field; most keys go to it.
    TextInput,
}

impl Screen {
    /// The screen that matches a session status.
    pub fn for_status(status: Status) -> Screen {
        match status {
            Status::AwaitingSecret => Screen::Attacker,
            Status::InProgress => Screen::Defender,
            Status::Defeated | Status::ChampionOfCategory => Screen::GameOver,
        }
    }

    /// Title bar text.
    pub fn title(self) -> &'static str {
        match self {
            Screen::MainMenu => "Main Menu",
            Screen::Instructions => "How to Play",
            Screen::CategorySelect => "Choose a Category",
            Screen::Attacker => "Attacker",
            Screen::Defender => "Defender",
            Screen::GameOver => "Game Over",
            Screen::History => "Game History",
        }
    }

    /// Input routing for the screen.
    pub fn input_mode(self) -> InputMode {
        match self {
            Screen::Attacker | Screen::Defender => InputMode::TextInput,
            _ => InputMode::Navigate,
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(self) -> &'static str {
        match self {
            Screen::MainMenu => "\u{2191}/\u{2193}:select  Enter:open  1-4:jump  ?:help  q:quit",
            Screen::Instructions | Screen::History => "Esc/Enter:back  ?:help  q:quit",
            Screen::CategorySelect => {
                "\u{2191}/\u{2193}:select  Enter:start  t:toggle hot-seat  Esc:back  q:quit"
            }
            Screen::Attacker => "Enter:lock in  Tab:show/hide  Esc:abandon run  Ctrl+C:quit",
            Screen::Defender => "Enter:guess  \u{2191}/\u{2193}:scroll  Esc:abandon run  Ctrl+C:quit",
            Screen::GameOver => "Enter/r:play again  c:category  h:history  Esc:menu  q:quit",
        }
    }
}

/// Draw the active screen into `area`.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::MainMenu => main_menu::draw(frame, app, area),
        Screen::Instructions => instructions::draw(frame, app, area),
        Screen::CategorySelect => category_select::draw(frame, app, area),
        Screen::Attacker => attacker::draw(frame, app, area),
        Screen::Defender => defender::draw(frame, app, area),
        Screen::GameOver => game_over::draw(frame, app, area),
        Screen::History => history::draw(frame, app, area),
    }
}

/// Draw the title bar.
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" GUESS DUEL ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(" "),
        Span::styled(app.screen.title(), Style::default().fg(Color::Cyan)),
    ];
    let in_run = matches!(app.screen, Screen::Attacker | Screen::Defender);
    if let Some(session) = app.session.as_ref().filter(|_| in_run) {
        spans.push(Span::styled(
            format!("  {} | Level {}/5", session.category(), session.level()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Line::from(spans), area);
}
