//! Rock-paper-scissors domain module.
//!
//! Rules and scoring only, implemented as deterministic domain logic (no IO,
//! no randomness). Interactive play lives in `bodega-console`.

pub mod error;
pub mod game;
pub mod roll;

pub use error::{GameError, GameResult};
pub use game::{Player, Series};
pub use roll::{Roll, RoundOutcome, Ruleset};
