//! Cues for the audio and animation layer.
//!
//! The engine never waits on playback. A reaction lists the cues it raised
//! and a front end hands them to whatever [`CueSink`] it owns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named moment the presentation layer may want to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// A guess missed.
    WrongGuess,
    /// A guess hit.
    CorrectGuess,
    /// A hint became available on this turn.
    HintUnlocked,
    /// A level was cleared and the next begins.
    LevelCleared,
    /// The Defender ran out of hit points.
    Defeated,
    /// The Defender cleared the category.
    Champion,
}

impl Cue {
    /// Stable event name, e.g. for mapping to sound files.
    pub fn name(self) -> &'static str {
        match self {
            Self::WrongGuess => "wrong_guess",
            Self::CorrectGuess => "correct_guess",
            Self::HintUnlocked => "hint_unlocked",
            Self::LevelCleared => "level_cleared",
            Self::Defeated => "defeated",
            Self::Champion => "champion",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives cues. Implementations must not block.
pub trait CueSink {
    /// Handle one cue.
    fn cue(&mut self, cue: Cue);
}

/// Collects cues in order; handy for tests and replays.
impl CueSink for Vec<Cue> {
    fn cue(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CueSink for Silent {
    fn cue(&mut self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(Cue::LevelCleared.name(), "level_cleared");
        assert_eq!(Cue::Defeated.to_string(), "defeated");
        assert_eq!(Cue::Champion.name(), "champion");
        assert_eq!(Cue::WrongGuess.name(), "wrong_guess");
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Cue> = Vec::new();
        sink.cue(Cue::WrongGuess);
        sink.cue(Cue::Defeated);
        assert_eq!(sink, vec![Cue::WrongGuess, Cue::Defeated]);
    }

    #[test]
    fn serde_matches_name() {
        let json = serde_json::to_string(&Cue::HintUnlocked).unwrap();
        assert_eq!(json, "\"hint_unlocked\"");
    }
}
