//! Level and category progression.
//!
//! A run starts at level 1 of the chosen category. A correct guess clears the
//! level and moves to the next; clearing level 5 makes the Defender champion
//! of the category. A wrong guess that empties the hit points defeats the
//! Defender. Both endings are terminal: playing again needs a new session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{Category, Level};
use crate::evaluator::Outcome;
use crate::hp::HitPoints;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The level has started and the Attacker has not chosen a secret yet.
    AwaitingSecret,
    /// The Defender is guessing.
    InProgress,
    /// The Defender ran out of hit points.
    Defeated,
    /// The Defender cleared all five levels.
    ChampionOfCategory,
}

impl Status {
    /// Whether the run is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Defeated | Self::ChampionOfCategory)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingSecret => write!(f, "awaiting secret"),
            Self::InProgress => write!(f, "in progress"),
            Self::Defeated => write!(f, "defeated"),
            Self::ChampionOfCategory => write!(f, "champion"),
        }
    }
}

/// A change of level or an ending, produced by a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A level was cleared and the next one begins.
    LevelCleared {
        /// The level just cleared.
        cleared: Level,
        /// The level now being played.
        next: Level,
    },
    /// The Defender lost all hit points.
    Defeated {
        /// The level on which the run ended.
        level: Level,
    },
    /// The final level was cleared.
    Champion,
}

/// Tracks the category and level of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    category: Category,
    level: Level,
    levels_cleared: u32,
}

impl Progression {
    /// Start at level 1 of a category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            level: Level::FIRST,
            levels_cleared: 0,
        }
    }

    /// The category being played.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The current level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// How many levels have been cleared in this run.
    pub fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }

    /// Apply an evaluated guess. `hp` is the Defender's hit points after the
    /// guess was scored. Returns `None` when the level simply continues.
    pub fn record(&mut self, outcome: Outcome, hp: HitPoints) -> Option<Transition> {
        if outcome.is_correct() {
            self.levels_cleared += 1;
            return Some(match self.level.next() {
                Some(next) => {
                    let cleared = self.level;
                    self.level = next;
                    Transition::LevelCleared { cleared, next }
                }
                None => Transition::Champion,
            });
        }

        hp.is_depleted().then_some(Transition::Defeated { level: self.level })
    }

    /// Go back to level 1 of the same category.
    pub fn restart(&mut self) {
        self.level = Level::FIRST;
        self.levels_cleared = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn starts_at_level_one() {
        let p = Progression::new(Category::Medium);
        assert_eq!(p.category(), Category::Medium);
        assert_eq!(p.level(), Level::FIRST);
        assert_eq!(p.levels_cleared(), 0);
    }

    #[test]
    fn correct_guess_advances() {
        let mut p = Progression::new(Category::Easy);
        let t = p.record(Outcome::Correct, HitPoints::full(3));
        assert_eq!(
            t,
            Some(Transition::LevelCleared {
                cleared: level(1),
                next: level(2)
            })
        );
        assert_eq!(p.level(), level(2));
        assert_eq!(p.levels_cleared(), 1);
    }

    #[test]
    fn wrong_guess_with_hp_left_stays() {
        let mut p = Progression::new(Category::Easy);
        let hp = HitPoints::full(3).apply_wrong_guess();
        assert_eq!(p.record(Outcome::TooLow, hp), None);
        assert_eq!(p.level(), Level::FIRST);
    }

    #[test]
    fn wrong_guess_emptying_hp_defeats() {
        let mut p = Progression::new(Category::Hard);
        let hp = HitPoints::full(1).apply_wrong_guess();
        assert_eq!(
            p.record(Outcome::TooHigh, hp),
            Some(Transition::Defeated { level: Level::FIRST })
        );
    }

    #[test]
    fn clearing_final_level_is_champion() {
        let mut p = Progression::new(Category::Easy);
        for _ in 0..4 {
            p.record(Outcome::Correct, HitPoints::full(3));
        }
        assert_eq!(p.level(), Level::FINAL);
        assert_eq!(
            p.record(Outcome::Correct, HitPoints::full(3)),
            Some(Transition::Champion)
        );
        assert_eq!(p.level(), Level::FINAL);
        assert_eq!(p.levels_cleared(), 5);
    }

    #[test]
    fn restart_resets_level() {
        let mut p = Progression::new(Category::Easy);
        p.record(Outcome::Correct, HitPoints::full(3));
        p.record(Outcome::Correct, HitPoints::full(3));
        p.restart();
        assert_eq!(p.level(), Level::FIRST);
        assert_eq!(p.levels_cleared(), 0);
    }

    #[test]
    fn terminal_statuses() {
        assert!(Status::Defeated.is_terminal());
        assert!(Status::ChampionOfCategory.is_terminal());
        assert!(!Status::InProgress.is_terminal());
        assert!(!Status::AwaitingSecret.is_terminal());
    }
}
