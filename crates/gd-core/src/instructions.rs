//! How-to-play text shared by the front ends.

/// Instruction lines, in display order.
pub const INSTRUCTIONS: &[&str] = &[
    "1. The Attacker holds a secret number within the level's range",
    "2. The Defender tries to guess it",
    "3. Each wrong guess costs the Defender 1 HP; the reply says too low or too high",
    "4. The run ends when the Defender loses all HP",
    "5. A correct guess clears the level and restores HP for the next one",
    "6. From level 3, two wrong guesses on a level unlock a hint",
    "7. Complete all 5 levels to become a Category Champion!",
];
