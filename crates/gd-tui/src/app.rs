//! Top-level application state: the active screen, the running session, and
//! the run history.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use gd_core::{
    Category, Cue, CueSink, Event, GameConfig, History, Reaction, SecretMode, Session, Status,
    Transition, TurnOutcome,
};

use crate::input::TextInput;
use crate::screens::{InputMode, Screen};
use crate::shared::{OutputLine, OutputStyle};

/// Main menu entries, in display order.
pub const MENU_ITEMS: [&str; 4] = ["Play", "Instructions", "History", "Quit"];

/// Main application state.
pub struct App {
    /// Screen currently showing.
    pub screen: Screen,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Highlighted main menu entry.
    pub menu_index: usize,
    /// Highlighted category on the selection screen.
    pub category_index: usize,
    /// Whether a second player types the secrets.
    pub hot_seat: bool,
    /// Whether the Attacker's typed secret is shown in clear.
    pub show_secret: bool,
    /// Table, seed, and secret source for new runs.
    pub config: GameConfig,
    /// The current or most recently finished run.
    pub session: Option<Session>,
    /// Finished runs.
    pub history: History,
    /// Text field for secrets and guesses.
    pub input: TextInput,
    /// Feedback for the current run.
    pub log: Vec<OutputLine>,
    /// Log scroll offset from the bottom (0 = newest).
    pub log_scroll: u16,
    /// Most recent cue, used to tint the HP bar.
    pub last_cue: Option<Cue>,
}

impl App {
    /// Create the app on the main menu.
    pub fn new(config: GameConfig, hot_seat: bool) -> Self {
        Self {
            screen: Screen::MainMenu,
            show_help: false,
            should_quit: false,
            menu_index: 0,
            category_index: 0,
            hot_seat,
            show_secret: false,
            config,
            session: None,
            history: History::new(),
            input: TextInput::default(),
            log: Vec::new(),
            log_scroll: 0,
            last_cue: None,
        }
    }

    /// Input routing for the active screen.
    pub fn input_mode(&self) -> InputMode {
        self.screen.input_mode()
    }

    /// Begin a fresh run in `category`.
    pub fn start_run(&mut self, category: Category) {
        let mut config = self.config.clone();
        if self.hot_seat {
            config = config.with_secret_mode(SecretMode::AttackerChooses);
        }
        self.session = Some(Session::new(category, &config));
        self.category_index = Category::ALL
            .iter()
            .position(|&c| c == category)
            .unwrap_or(0);
        self.begin();
    }

    /// Start the same category again after a run ends.
    pub fn play_again(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.restart();
            self.begin();
        }
    }

    /// Drop the current run without recording it.
    pub fn abandon_run(&mut self) {
        if let Some(session) = &self.session {
            debug!(category = %session.category(), level = %session.level(), "run abandoned");
        }
        self.session = None;
        self.input.clear();
        self.screen = Screen::MainMenu;
    }

    /// Send the text field to the session.
    pub fn submit(&mut self) {
        let Some(status) = self.session.as_ref().map(Session::status) else {
            return;
        };
        let text = self.input.take();
        if text.trim().is_empty() {
            return;
        }
        let event = if status == Status::AwaitingSecret {
            Event::ChooseSecret(text)
        } else {
            self.push_log(OutputStyle::Command, &text);
            Event::SubmitGuess(text)
        };

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.handle_event(event) {
            Ok(reaction) => self.apply(&reaction),
            Err(e) => self.push_log(OutputStyle::Error, &e.to_string()),
        }
    }

    /// Handle a key for the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::MainMenu => self.main_menu_key(key.code),
            Screen::Instructions | Screen::History => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                    self.screen = Screen::MainMenu;
                }
            }
            Screen::CategorySelect => self.category_key(key.code),
            Screen::Attacker => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.show_secret = !self.show_secret,
                KeyCode::Esc => self.abandon_run(),
                code => {
                    self.input.handle_key(code);
                }
            },
            Screen::Defender => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Up => self.scroll_up(),
                KeyCode::Down => self.scroll_down(),
                KeyCode::Esc => self.abandon_run(),
                code => {
                    self.input.handle_key(code);
                }
            },
            Screen::GameOver => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.play_again(),
                KeyCode::Char('c') => self.screen = Screen::CategorySelect,
                KeyCode::Char('h') => self.screen = Screen::History,
                KeyCode::Esc | KeyCode::Char('m') => self.screen = Screen::MainMenu,
                _ => {}
            },
        }
    }

    /// Scroll the log, or move the highlight on list screens.
    pub fn scroll_up(&mut self) {
        match self.screen {
            Screen::MainMenu => self.menu_index = self.menu_index.saturating_sub(1),
            Screen::CategorySelect => self.category_index = self.category_index.saturating_sub(1),
            _ => self.log_scroll = self.log_scroll.saturating_add(1),
        }
    }

    /// Counterpart of [`App::scroll_up`].
    pub fn scroll_down(&mut self) {
        match self.screen {
            Screen::MainMenu => self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1),
            Screen::CategorySelect => {
                self.category_index = (self.category_index + 1).min(Category::ALL.len() - 1);
            }
            _ => self.log_scroll = self.log_scroll.saturating_sub(1),
        }
    }

    fn main_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Enter => self.open_menu_item(self.menu_index),
            KeyCode::Char(c) => {
                if let Some(n) = c.to_digit(10).filter(|n| (1..=4).contains(n)) {
                    self.menu_index = n as usize - 1;
                    self.open_menu_item(self.menu_index);
                }
            }
            _ => {}
        }
    }

    fn open_menu_item(&mut self, index: usize) {
        match index {
            0 => self.screen = Screen::CategorySelect,
            1 => self.screen = Screen::Instructions,
            2 => self.screen = Screen::History,
            _ => self.should_quit = true,
        }
    }

    fn category_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Char('t') => self.hot_seat = !self.hot_seat,
            KeyCode::Enter => self.start_run(Category::ALL[self.category_index]),
            KeyCode::Esc => self.screen = Screen::MainMenu,
            _ => {}
        }
    }

    /// Reset per-run view state and show the first level.
    fn begin(&mut self) {
        self.log.clear();
        self.log_scroll = 0;
        self.last_cue = None;
        self.input.clear();
        self.show_secret = false;
        if let Some(session) = &self.session {
            let intro = format!(
                "{} mode. Clear 5 levels to become champion.",
                session.category()
            );
            self.push_log(OutputStyle::System, &intro);
            self.announce_level();
        }
        self.sync_screen();
    }

    fn announce_level(&mut self) {
        if let Some(session) = &self.session {
            let text = format!(
                "Level {}: guess a number between {} and {} ({})",
                session.level(),
                session.range().min,
                session.range().max,
                session.hp()
            );
            self.push_log(OutputStyle::System, &text);
        }
    }

    fn apply(&mut self, reaction: &Reaction) {
        reaction.dispatch(self);
        let snap = &reaction.snapshot;

        match &reaction.outcome {
            TurnOutcome::Correct => self.push_log(OutputStyle::Result, "Correct!"),
            TurnOutcome::TooLow => self.push_log(OutputStyle::Result, "Too low"),
            TurnOutcome::TooHigh => self.push_log(OutputStyle::Result, "Too high"),
            TurnOutcome::InvalidGuess(e) => {
                self.push_log(OutputStyle::Error, &format!("Invalid guess: {e}"));
            }
            TurnOutcome::SecretAccepted => {
                self.push_log(OutputStyle::System, "Secret locked in. Defender, your turn.");
            }
            TurnOutcome::InvalidSecret(e) => {
                self.push_log(OutputStyle::Error, &format!("Invalid secret: {e}"));
            }
        }

        if reaction.cues.contains(&Cue::HintUnlocked) {
            self.push_log(OutputStyle::System, "Hint unlocked!");
        }

        match reaction.transition {
            Some(Transition::LevelCleared { cleared, .. }) => {
                self.push_log(OutputStyle::System, &format!("Level {cleared} cleared!"));
                self.announce_level();
            }
            Some(Transition::Defeated { .. } | Transition::Champion) => {
                if let Some(record) = self.session.as_ref().and_then(Session::run_record) {
                    self.history.push(record);
                }
            }
            None => {}
        }

        if snap.status == Status::AwaitingSecret {
            self.show_secret = false;
        }
        self.sync_screen();
    }

    fn sync_screen(&mut self) {
        if let Some(session) = &self.session {
            self.screen = Screen::for_status(session.status());
        }
    }

    fn push_log(&mut self, style: OutputStyle, text: &str) {
        self.log.push(OutputLine {
            style,
            text: text.to_string(),
        });
        self.log_scroll = 0;
    }
}

impl CueSink for App {
    fn cue(&mut self, cue: Cue) {
        debug!(%cue, "cue");
        self.last_cue = Some(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn scripted(secrets: &[u32]) -> App {
        let config = GameConfig::default()
            .with_seed(3)
            .with_secret_mode(SecretMode::Scripted(secrets.to_vec()));
        App::new(config, false)
    }

    #[test]
    fn menu_navigation() {
        let mut app = scripted(&[]);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Instructions);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::MainMenu);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.screen, Screen::History);
    }

    #[test]
    fn menu_quit_entry() {
        let mut app = scripted(&[]);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.menu_index, MENU_ITEMS.len() - 1);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn category_select_starts_run() {
        let mut app = scripted(&[20]);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::CategorySelect);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Defender);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.category(), Category::Medium);
    }

    #[test]
    fn guesses_flow_through_the_session() {
        let mut app = scripted(&[7]);
        app.start_run(Category::Easy);
        type_line(&mut app, "3");
        assert_eq!(app.last_cue, Some(Cue::WrongGuess));
        assert_eq!(app.session.as_ref().unwrap().hp().current(), 2);
        type_line(&mut app, "7");
        assert_eq!(app.session.as_ref().unwrap().level().get(), 2);
        let texts: Vec<&str> = app.log.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"Too low"));
        assert!(texts.contains(&"Level 1 cleared!"));
        assert!(texts.iter().any(|t| t.starts_with("Level 2: guess a number between 1 and 12")));
    }

    #[test]
    fn invalid_guess_is_logged_without_cost() {
        let mut app = scripted(&[7]);
        app.start_run(Category::Easy);
        type_line(&mut app, "99");
        assert_eq!(app.session.as_ref().unwrap().hp().current(), 3);
        let last = app.log.last().unwrap();
        assert_eq!(last.text, "Invalid guess: 99 is outside the range 1-10");
    }

    #[test]
    fn defeat_records_history_and_shows_game_over() {
        let mut app = scripted(&[7]);
        app.start_run(Category::Easy);
        for guess in ["1", "2", "3"] {
            type_line(&mut app, guess);
        }
        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.session.as_ref().unwrap().reveal_secret(), Some(7));

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.screen, Screen::Defender);
        assert_eq!(app.session.as_ref().unwrap().hp().current(), 3);
    }

    #[test]
    fn hot_seat_starts_on_attacker_screen() {
        let mut app = App::new(GameConfig::default().with_seed(1), true);
        app.start_run(Category::Easy);
        assert_eq!(app.screen, Screen::Attacker);
        assert_eq!(app.input_mode(), InputMode::TextInput);

        type_line(&mut app, "0");
        assert_eq!(app.screen, Screen::Attacker);
        type_line(&mut app, "5");
        assert_eq!(app.screen, Screen::Defender);
        assert!(app.log.iter().all(|l| l.style != OutputStyle::Command));
        type_line(&mut app, "5");
        assert_eq!(app.screen, Screen::Attacker);
    }

    #[test]
    fn escape_abandons_run() {
        let mut app = scripted(&[7]);
        app.start_run(Category::Easy);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
        assert!(app.history.is_empty());
    }
}
