//! Error types for the game engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::progression::Status;

/// Result type for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Result type for loading and validating difficulty tables.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Misuse of the engine by the calling code.
///
/// User mistakes (typing `abc` or a number outside the range) are not errors;
/// they come back as an outcome on the turn's reaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A level outside 1-5 was requested.
    #[error("invalid level {0}: levels run from 1 to 5")]
    InvalidCategoryOrLevel(u32),

    /// An unknown category name was supplied.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The run already ended; start a new session to play again.
    #[error("the run is over ({0}); start a new session")]
    RunFinished(Status),

    /// The event does not apply to the current phase of the level.
    #[error("cannot {action} while {status}")]
    WrongPhase {
        /// What the caller attempted.
        action: &'static str,
        /// The session status at the time.
        status: Status,
    },
}

/// Errors that can occur while loading a difficulty table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The table JSON was malformed.
    #[error("invalid table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table parsed but breaks a rule the engine relies on.
    #[error("invalid table entry for {category} level {level}: {reason}")]
    Invalid {
        /// Category of the offending entry.
        category: String,
        /// Level of the offending entry.
        level: u32,
        /// What is wrong with it.
        reason: String,
    },
}
