//! Level and session state machine for Guess Duel.
//!
//! Guess Duel is a two-player number game. The Attacker holds a secret; the
//! Defender guesses it and loses a hit point on every miss. Each difficulty
//! category has five levels with widening ranges, and the later levels hand
//! out hints after repeated misses. Clear all five to become champion of the
//! category.
//!
//! Rendering and sound live outside this crate: a front end feeds
//! [`Event`]s into a [`Session`] and renders the [`Reaction`] that comes back,
//! forwarding its [`Cue`]s to a [`CueSink`].

pub mod category;
pub mod config;
pub mod cue;
pub mod error;
pub mod evaluator;
pub mod hint;
pub mod history;
pub mod hp;
pub mod input;
pub mod instructions;
pub mod progression;
pub mod selector;
pub mod session;
pub mod table;

pub use category::{Category, Level};
pub use config::{GameConfig, SecretMode};
pub use cue::{Cue, CueSink};
pub use error::{ConfigError, ConfigResult, GameError, GameResult};
pub use evaluator::{Outcome, evaluate};
pub use hint::{Hint, HintKind, maybe_hint};
pub use history::{Ending, History, RunRecord};
pub use hp::HitPoints;
pub use input::{InvalidInput, parse_guess};
pub use instructions::INSTRUCTIONS;
pub use progression::{Progression, Status, Transition};
pub use selector::Secret;
pub use session::{Event, Reaction, Session, Snapshot, TurnOutcome};
pub use table::{DifficultyTable, LevelRules, NumberRange};
