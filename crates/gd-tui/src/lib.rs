//! Terminal UI for the Guess Duel number game.
//!
//! A ratatui front end over [`gd_core::Session`]: main menu, instructions,
//! category selection, Attacker secret entry, the Defender's guessing screen
//! with HP bar and hint panel, a game-over screen, and run history.

pub mod app;
pub mod input;
pub mod screens;
pub mod shared;
pub mod terminal;
