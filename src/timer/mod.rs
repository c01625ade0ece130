//! Countdown timer for a "boredom session".
//!
//! Fully independent of the runner game: it only shares the screen. The
//! player picks a duration (presets or a custom number of minutes),
//! starts/pauses it, and gets a one-shot notice when it reaches zero.

pub mod logic;
pub mod types;

pub use types::*;
