//! The difficulty table: ranges, hit points, and hint tiers per level.
//!
//! One lookup keyed by (category, level) feeds both the number selector and
//! the hint provider. The built-in table follows the classic layout: Easy
//! starts from one-digit numbers, Medium from two, Hard from three, and each
//! level widens the upper bound.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{Category, Level};
use crate::error::{ConfigError, ConfigResult};
use crate::hint::{HINT_MIN_LEVEL, HintKind};

/// Smallest number of values a level range may hold.
///
/// With four values a parity hint still leaves two candidates.
pub const MIN_RANGE_SIZE: u64 = 4;

/// Upper-bound scale per level, in percent of the category's base maximum.
const LEVEL_SCALE_PERCENT: [u32; Level::COUNT] = [100, 120, 130, 150, 200];

/// An inclusive range of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    /// Smallest allowed value.
    pub min: u32,
    /// Largest allowed value.
    pub max: u32,
}

impl NumberRange {
    /// Create a range from its bounds.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of values in the range (0 if the bounds are inverted).
    pub fn size(&self) -> u64 {
        if self.max < self.min {
            0
        } else {
            u64::from(self.max) - u64::from(self.min) + 1
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Rules for a single (category, level) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRules {
    /// Range the secret is drawn from and guesses must fall in.
    pub range: NumberRange,
    /// Defender HP at the start of the level.
    pub starting_hp: u32,
    /// Hint tier unlocked on this level, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintKind>,
}

/// The five levels of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    /// Rules for levels 1-5, in order.
    pub levels: [LevelRules; Level::COUNT],
}

impl CategoryTable {
    /// Build a category from a base range and HP budget, widening the upper
    /// bound level by level.
    pub fn scaled(base: NumberRange, starting_hp: u32) -> Self {
        let levels = std::array::from_fn(|i| LevelRules {
            range: NumberRange::new(base.min, base.max * LEVEL_SCALE_PERCENT[i] / 100),
            starting_hp,
            hint: default_hint(i + 1),
        });
        Self { levels }
    }

    /// Rules for one level.
    pub fn level(&self, level: Level) -> &LevelRules {
        &self.levels[level.index()]
    }
}

fn default_hint(level: usize) -> Option<HintKind> {
    match level {
        3 => Some(HintKind::Parity),
        4 => Some(HintKind::HalfRange),
        5 => Some(HintKind::QuarterRange),
        _ => None,
    }
}

/// Ranges, HP, and hint tiers for every category and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    /// Easy category.
    pub easy: CategoryTable,
    /// Medium category.
    pub medium: CategoryTable,
    /// Hard category.
    pub hard: CategoryTable,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: CategoryTable::scaled(NumberRange::new(1, 10), 3),
            medium: CategoryTable::scaled(NumberRange::new(10, 99), 3),
            hard: CategoryTable::scaled(NumberRange::new(100, 999), 2),
        }
    }
}

impl DifficultyTable {
    /// The table for one category.
    pub fn category(&self, category: Category) -> &CategoryTable {
        match category {
            Category::Easy => &self.easy,
            Category::Medium => &self.medium,
            Category::Hard => &self.hard,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryTable {
        match category {
            Category::Easy => &mut self.easy,
            Category::Medium => &mut self.medium,
            Category::Hard => &mut self.hard,
        }
    }

    /// Rules for a (category, level) cell.
    pub fn rules(&self, category: Category, level: Level) -> &LevelRules {
        self.category(category).level(level)
    }

    /// Set the starting HP of every level in a category.
    pub fn with_starting_hp(mut self, category: Category, hp: u32) -> Self {
        for rules in &mut self.category_mut(category).levels {
            rules.starting_hp = hp;
        }
        self
    }

    /// Replace the range of one level.
    pub fn with_range(mut self, category: Category, level: Level, range: NumberRange) -> Self {
        self.category_mut(category).levels[level.index()].range = range;
        self
    }

    /// Replace the hint tier of one level.
    pub fn with_hint(mut self, category: Category, level: Level, hint: Option<HintKind>) -> Self {
        self.category_mut(category).levels[level.index()].hint = hint;
        self
    }

    /// Check every cell against the rules the engine relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        for category in Category::ALL {
            for level in Level::all() {
                let rules = self.rules(category, level);
                let invalid = |reason: String| ConfigError::Invalid {
                    category: category.to_string(),
                    level: level.get(),
                    reason,
                };

                if rules.range.size() < MIN_RANGE_SIZE {
                    return Err(invalid(format!(
                        "range {} must hold at least {MIN_RANGE_SIZE} values",
                        rules.range
                    )));
                }
                if rules.starting_hp == 0 {
                    return Err(invalid("starting HP must be at least 1".to_string()));
                }
                if level.get() >= HINT_MIN_LEVEL && rules.hint.is_none() {
                    return Err(invalid(format!(
                        "levels {HINT_MIN_LEVEL}-5 need a hint tier"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a table from JSON.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a JSON file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Render the table as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
