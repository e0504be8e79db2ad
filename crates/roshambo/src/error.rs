//! Game error model.

use thiserror::Error;

/// Result type used across the game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Deterministic, caller-correctable game failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Player names must contain at least one non-whitespace character.
    #[error("player name cannot be blank")]
    BlankPlayerName,

    /// The ruleset has no roll under the given name.
    #[error("unknown roll `{0}`")]
    UnknownRoll(String),

    /// A ruleset failed its consistency checks.
    #[error("invalid ruleset: {0}")]
    InvalidRuleset(String),

    /// A series must be played to at least one win.
    #[error("target wins must be at least 1, got {0}")]
    InvalidTargetWins(u32),

    /// The series already has a winner; no further rounds are accepted.
    #[error("series is already decided")]
    SeriesDecided,
}

impl GameError {
    pub fn invalid_ruleset(msg: impl Into<String>) -> Self {
        Self::InvalidRuleset(msg.into())
    }
}
