//! Guess evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::Secret;

/// How a guess compares to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The guess is the secret.
    Correct,
    /// The guess is below the secret.
    TooLow,
    /// The guess is above the secret.
    TooHigh,
}

impl Outcome {
    /// Whether the guess hit.
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct"),
            Self::TooLow => write!(f, "Too low"),
            Self::TooHigh => write!(f, "Too high"),
        }
    }
}

/// Compare a guess to the secret.
pub fn evaluate(secret: Secret, guess: u32) -> Outcome {
    match guess.cmp(&secret.value()) {
        std::cmp::Ordering::Less => Outcome::TooLow,
        std::cmp::Ordering::Equal => Outcome::Correct,
        std::cmp::Ordering::Greater => Outcome::TooHigh,
    }
}
