//! Difficulty categories and level numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// A difficulty tier. Selects the number ranges and HP budget for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// One-digit numbers, three hit points.
    Easy,
    /// Two-digit numbers, three hit points.
    Medium,
    /// Three-digit numbers, two hit points.
    Hard,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 3] = [Category::Easy, Category::Medium, Category::Hard];

    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> GameResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            _ => Err(GameError::UnknownCategory(s.to_string())),
        }
    }

    /// Short description shown on category selection screens.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Easy => "1-digit numbers, 5 levels with increasing challenge",
            Self::Medium => "2-digit numbers, 5 levels with increasing challenge",
            Self::Hard => "3-digit numbers, 5 levels with increasing challenge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// A level number within a category, always in 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// The first level of every category.
    pub const FIRST: Level = Level(1);
    /// The final level; clearing it makes the Defender champion.
    pub const FINAL: Level = Level(5);
    /// Number of levels per category.
    pub const COUNT: usize = 5;

    /// Create a level, rejecting numbers outside 1-5.
    pub fn new(n: u32) -> GameResult<Self> {
        if (1..=Self::FINAL.0).contains(&n) {
            Ok(Self(n))
        } else {
            Err(GameError::InvalidCategoryOrLevel(n))
        }
    }

    /// The level number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based index into per-level tables.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The following level, or `None` after the final one.
    pub fn next(self) -> Option<Level> {
        (self < Self::FINAL).then_some(Level(self.0 + 1))
    }

    /// Whether this is the last level of the category.
    pub fn is_final(self) -> bool {
        self == Self::FINAL
    }

    /// All levels in order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=Self::FINAL.0).map(Level)
    }
}

impl TryFrom<u32> for Level {
    type Error = GameError;

    fn try_from(n: u32) -> GameResult<Self> {
        Self::new(n)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
