//! Configuration for a game session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::table::DifficultyTable;

/// Who picks the secret at the start of each level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SecretMode {
    /// The engine draws the secret uniformly from the level range.
    #[default]
    Random,
    /// Secrets are taken in order from a list, one per level. A value outside
    /// the level range, or an exhausted list, falls back to a random draw.
    Scripted(Vec<u32>),
    /// A second player types the secret (hot-seat).
    AttackerChooses,
}

/// Configuration for a session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible secrets. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Ranges, hit points, and hint tiers.
    pub table: DifficultyTable,
    /// How secrets are chosen.
    pub secret_mode: SecretMode,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom difficulty table.
    pub fn with_table(mut self, table: DifficultyTable) -> Self {
        self.table = table;
        self
    }

    /// Set how secrets are chosen.
    pub fn with_secret_mode(mut self, mode: SecretMode) -> Self {
        self.secret_mode = mode;
        self
    }

    /// Build the RNG this configuration asks for.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
