//! Secret number selection.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::category::{Category, Level};
use crate::table::DifficultyTable;

/// The number the Attacker holds for the current level.
///
/// `Debug` output is redacted so the value does not leak through logs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(u32);

impl Secret {
    /// Wrap a number as a secret.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// The secret value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Draw a secret uniformly from the (category, level) range.
pub fn select(
    table: &DifficultyTable,
    category: Category,
    level: Level,
    rng: &mut StdRng,
) -> Secret {
    let range = table.rules(category, level).range;
    Secret(rng.random_range(range.min..=range.max))
}
