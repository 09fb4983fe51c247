//! Defender hit points.
//!
//! Hit points are a clamped counter that starts full at every level and
//! loses one point per wrong guess. Reaching zero ends the run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The Defender's hit points for the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    current: u32,
    max: u32,
}

impl HitPoints {
    /// Full hit points for a level with the given budget.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Remaining hit points.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Hit points at the start of the level.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Hit points after one more wrong guess, floored at zero.
    #[must_use]
    pub fn apply_wrong_guess(self) -> Self {
        Self {
            current: self.current.saturating_sub(1),
            ..self
        }
    }

    /// Returns true once no hit points remain.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of hit points left (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f64 / self.max as f64
    }
}

impl fmt::Display for HitPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HP: {}/{}", self.current, self.max)
    }
}
