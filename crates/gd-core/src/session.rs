//! The session controller.
//!
//! `Session` owns one run through a category: the current level, the secret,
//! the Defender's hit points, and the wrong-guess counter. Front ends feed it
//! one [`Event`] at a time through [`Session::handle_event`] and render the
//! returned [`Reaction`].

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::category::{Category, Level};
use crate::config::{GameConfig, SecretMode};
use crate::cue::{Cue, CueSink};
use crate::error::{GameError, GameResult};
use crate::evaluator::{Outcome, evaluate};
use crate::hint::{self, Hint};
use crate::history::{Ending, RunRecord};
use crate::hp::HitPoints;
use crate::input::{InvalidInput, check_range, parse_guess};
use crate::progression::{Progression, Status, Transition};
use crate::selector::{self, Secret};
use crate::table::{DifficultyTable, LevelRules, NumberRange};

/// Input delivered by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The Defender typed a guess.
    SubmitGuess(String),
    /// The Attacker typed the secret for the level (hot-seat mode).
    ChooseSecret(String),
}

/// What happened to the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The guess was the secret.
    Correct,
    /// The guess was below the secret.
    TooLow,
    /// The guess was above the secret.
    TooHigh,
    /// The guess was refused; nothing changed.
    InvalidGuess(InvalidInput),
    /// The Attacker's secret was accepted and guessing may begin.
    SecretAccepted,
    /// The Attacker's secret was refused; nothing changed.
    InvalidSecret(InvalidInput),
}

impl From<Outcome> for TurnOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Self::Correct,
            Outcome::TooLow => Self::TooLow,
            Outcome::TooHigh => Self::TooHigh,
        }
    }
}

/// A read-only view of the session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Category being played.
    pub category: Category,
    /// Current level.
    pub level: Level,
    /// Range guesses must fall in on this level.
    pub range: NumberRange,
    /// Defender hit points.
    pub hp: HitPoints,
    /// Wrong guesses on this level.
    pub wrong_guesses: u32,
    /// Levels cleared in this run.
    pub levels_cleared: u32,
    /// Where the run stands.
    pub status: Status,
}

/// Everything a front end needs after one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// What happened to the event.
    pub outcome: TurnOutcome,
    /// The hint currently available, if any.
    pub hint: Option<Hint>,
    /// Level change or ending caused by the event.
    pub transition: Option<Transition>,
    /// Cues raised by the event, in order.
    pub cues: Vec<Cue>,
    /// State after the event.
    pub snapshot: Snapshot,
}

impl Reaction {
    /// Hand every cue to `sink`.
    pub fn dispatch(&self, sink: &mut dyn CueSink) {
        for &cue in &self.cues {
            sink.cue(cue);
        }
    }
}

/// One run through a category.
#[derive(Debug)]
pub struct Session {
    table: DifficultyTable,
    attacker_chooses: bool,
    script: VecDeque<u32>,
    rng: StdRng,
    progression: Progression,
    secret: Option<Secret>,
    hp: HitPoints,
    wrong_guesses: u32,
    total_wrong_guesses: u32,
    status: Status,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a run at level 1 of `category`.
    pub fn new(category: Category, config: &GameConfig) -> Self {
        let (attacker_chooses, script) = match &config.secret_mode {
            SecretMode::Random => (false, VecDeque::new()),
            SecretMode::Scripted(secrets) => (false, secrets.iter().copied().collect()),
            SecretMode::AttackerChooses => (true, VecDeque::new()),
        };
        let starting_hp = config.table.rules(category, Level::FIRST).starting_hp;

        let mut session = Self {
            table: config.table.clone(),
            attacker_chooses,
            script,
            rng: config.rng(),
            progression: Progression::new(category),
            secret: None,
            hp: HitPoints::full(starting_hp),
            wrong_guesses: 0,
            total_wrong_guesses: 0,
            status: Status::AwaitingSecret,
            finished_at: None,
        };
        session.start_level();
        session
    }

    /// Category being played.
    pub fn category(&self) -> Category {
        self.progression.category()
    }

    /// Current level.
    pub fn level(&self) -> Level {
        self.progression.level()
    }

    /// Defender hit points.
    pub fn hp(&self) -> HitPoints {
        self.hp
    }

    /// Wrong guesses on the current level.
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Where the run stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Rules for the current level.
    pub fn rules(&self) -> &LevelRules {
        self.table.rules(self.category(), self.level())
    }

    /// Range for the current level.
    pub fn range(&self) -> NumberRange {
        self.rules().range
    }

    /// The secret, once the run is over and it no longer matters.
    pub fn reveal_secret(&self) -> Option<u32> {
        if self.status.is_terminal() {
            self.secret.map(Secret::value)
        } else {
            None
        }
    }

    /// The hint available right now, if any.
    pub fn current_hint(&self) -> Option<Hint> {
        if self.status != Status::InProgress {
            return None;
        }
        let secret = self.secret?;
        hint::maybe_hint(secret, self.level(), self.wrong_guesses, self.rules())
    }

    /// A read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.category(),
            level: self.level(),
            range: self.range(),
            hp: self.hp,
            wrong_guesses: self.wrong_guesses,
            levels_cleared: self.progression.levels_cleared(),
            status: self.status,
        }
    }

    /// Process one event.
    pub fn handle_event(&mut self, event: Event) -> GameResult<Reaction> {
        match event {
            Event::SubmitGuess(raw) => self.submit_guess(&raw),
            Event::ChooseSecret(raw) => self.choose_secret(&raw),
        }
    }

    /// Parse and score a typed guess.
    pub fn submit_guess(&mut self, raw: &str) -> GameResult<Reaction> {
        self.require_secret("guess")?;
        match parse_guess(raw, self.range()) {
            Ok(value) => self.guess(value),
            Err(invalid) => Ok(self.reject_guess(invalid)),
        }
    }

    /// Score a guess.
    pub fn guess(&mut self, value: u32) -> GameResult<Reaction> {
        let secret = self.require_secret("guess")?;
        if let Err(invalid) = check_range(value, self.range()) {
            return Ok(self.reject_guess(invalid));
        }

        let outcome = evaluate(secret, value);
        let mut cues = Vec::new();
        if outcome.is_correct() {
            cues.push(Cue::CorrectGuess);
        } else {
            self.hp = self.hp.apply_wrong_guess();
            self.wrong_guesses += 1;
            self.total_wrong_guesses += 1;
            cues.push(Cue::WrongGuess);
        }
        debug!(
            guess = value,
            outcome = %outcome,
            hp = self.hp.current(),
            wrong = self.wrong_guesses,
            "guess scored"
        );

        let transition = self.progression.record(outcome, self.hp);
        match transition {
            Some(Transition::LevelCleared { cleared, next }) => {
                info!(category = %self.category(), %cleared, %next, "level cleared");
                cues.push(Cue::LevelCleared);
                self.start_level();
            }
            Some(Transition::Champion) => {
                info!(category = %self.category(), "category cleared");
                cues.push(Cue::Champion);
                self.finish(Status::ChampionOfCategory);
            }
            Some(Transition::Defeated { level }) => {
                info!(category = %self.category(), %level, "defender defeated");
                cues.push(Cue::Defeated);
                self.finish(Status::Defeated);
            }
            None => {
                let level = self.level();
                if hint::is_eligible(level, self.wrong_guesses)
                    && !hint::is_eligible(level, self.wrong_guesses - 1)
                {
                    cues.push(Cue::HintUnlocked);
                }
            }
        }

        Ok(self.reaction(outcome.into(), transition, cues))
    }

    /// Parse and accept the Attacker's secret for the current level.
    pub fn choose_secret(&mut self, raw: &str) -> GameResult<Reaction> {
        if self.status.is_terminal() {
            return Err(GameError::RunFinished(self.status));
        }
        if self.status != Status::AwaitingSecret {
            return Err(GameError::WrongPhase {
                action: "choose a secret",
                status: self.status,
            });
        }

        match parse_guess(raw, self.range()) {
            Ok(value) => {
                self.secret = Some(Secret::new(value));
                self.status = Status::InProgress;
                debug!(level = %self.level(), "attacker chose secret");
                Ok(self.reaction(TurnOutcome::SecretAccepted, None, Vec::new()))
            }
            Err(invalid) => {
                debug!(%invalid, "attacker secret refused");
                Ok(self.reaction(TurnOutcome::InvalidSecret(invalid), None, Vec::new()))
            }
        }
    }

    /// Throw away the current run and start again at level 1 of the same
    /// category.
    pub fn restart(&mut self) {
        self.progression.restart();
        self.total_wrong_guesses = 0;
        self.finished_at = None;
        self.start_level();
    }

    /// Summary of the run, once it has ended.
    pub fn run_record(&self) -> Option<RunRecord> {
        let ending = match self.status {
            Status::ChampionOfCategory => Ending::Champion,
            Status::Defeated => Ending::Defeated {
                level: self.level(),
            },
            Status::AwaitingSecret | Status::InProgress => return None,
        };
        Some(RunRecord {
            category: self.category(),
            ending,
            levels_cleared: self.progression.levels_cleared(),
            wrong_guesses: self.total_wrong_guesses,
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
        })
    }

    fn start_level(&mut self) {
        let starting_hp = self.rules().starting_hp;
        self.hp = HitPoints::full(starting_hp);
        self.wrong_guesses = 0;
        self.secret = if self.attacker_chooses {
            None
        } else {
            Some(self.draw_secret())
        };
        self.status = if self.secret.is_some() {
            Status::InProgress
        } else {
            Status::AwaitingSecret
        };
        info!(
            category = %self.category(),
            level = %self.level(),
            range = %self.range(),
            hp = starting_hp,
            "level started"
        );
    }

    fn draw_secret(&mut self) -> Secret {
        let range = self.range();
        if let Some(value) = self.script.pop_front() {
            if range.contains(value) {
                return Secret::new(value);
            }
            warn!(value, %range, "scripted secret outside level range, drawing at random");
        }
        selector::select(&self.table, self.category(), self.level(), &mut self.rng)
    }

    fn finish(&mut self, status: Status) {
        self.status = status;
        self.finished_at = Some(Utc::now());
    }

    fn require_secret(&self, action: &'static str) -> GameResult<Secret> {
        if self.status.is_terminal() {
            return Err(GameError::RunFinished(self.status));
        }
        self.secret.ok_or(GameError::WrongPhase {
            action,
            status: self.status,
        })
    }

    fn reject_guess(&self, invalid: InvalidInput) -> Reaction {
        debug!(%invalid, "guess refused");
        self.reaction(TurnOutcome::InvalidGuess(invalid), None, Vec::new())
    }

    fn reaction(
        &self,
        outcome: TurnOutcome,
        transition: Option<Transition>,
        cues: Vec<Cue>,
    ) -> Reaction {
        Reaction {
            outcome,
            hint: self.current_hint(),
            transition,
            cues,
            snapshot: self.snapshot(),
        }
    }
}
