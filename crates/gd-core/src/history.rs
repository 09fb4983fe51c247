//! In-memory record of finished runs.
//!
//! History lives only as long as the process; nothing is written to disk.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, Level};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// The Defender cleared every level.
    Champion,
    /// The Defender ran out of hit points.
    Defeated {
        /// Level on which the run ended.
        level: Level,
    },
}

/// Summary of one finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Category played.
    pub category: Category,
    /// How the run ended.
    pub ending: Ending,
    /// Levels cleared before the end.
    pub levels_cleared: u32,
    /// Wrong guesses across the whole run.
    pub wrong_guesses: u32,
    /// When the run ended.
    pub finished_at: DateTime<Utc>,
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ending {
            Ending::Champion => write!(
                f,
                "Defender wins - completed all levels in {} mode",
                self.category
            )?,
            Ending::Defeated { level } => {
                write!(f, "Attacker wins - {} level {level}", self.category)?
            }
        }
        write!(f, " - {}", self.finished_at.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Finished runs, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    runs: Vec<RunRecord>,
}

impl History {
    /// How many runs the history screens show.
    pub const RECENT: usize = 10;

    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run.
    pub fn push(&mut self, record: RunRecord) {
        self.runs.push(record);
    }

    /// The last `n` runs, oldest first.
    pub fn recent(&self, n: usize) -> &[RunRecord] {
        let start = self.runs.len().saturating_sub(n);
        &self.runs[start..]
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether no run has finished yet.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs the Defender won.
    pub fn champion_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| r.ending == Ending::Champion)
            .count()
    }

    /// Plain-text listing of the recent runs.
    pub fn export_text(&self) -> String {
        if self.runs.is_empty() {
            return "No game history found".to_string();
        }
        let mut out = String::new();
        for record in self.recent(Self::RECENT) {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out
    }
}
