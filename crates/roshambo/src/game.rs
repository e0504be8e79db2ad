use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::roll::{Roll, RoundOutcome};

/// A participant in a series, with a running win count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    wins: u32,
}

impl Player {
    /// Create a player with zero wins. Blank names are rejected.
    pub fn new(name: impl Into<String>) -> GameResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }
        Ok(Self { name, wins: 0 })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    fn add_win(&mut self) {
        self.wins += 1;
    }
}

/// First-to-N series between two players.
///
/// Ties score nothing. Once one player reaches the target the series is
/// decided and no further rounds are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    player1: Player,
    player2: Player,
    target_wins: u32,
    rounds_played: u32,
}

impl Series {
    pub const DEFAULT_TARGET_WINS: u32 = 3;

    pub fn new(player1: Player, player2: Player, target_wins: u32) -> GameResult<Self> {
        if target_wins == 0 {
            return Err(GameError::InvalidTargetWins(target_wins));
        }
        Ok(Self {
            player1,
            player2,
            target_wins,
            rounds_played: 0,
        })
    }

    /// Series to [`Series::DEFAULT_TARGET_WINS`] wins.
    pub fn to_three(player1: Player, player2: Player) -> Self {
        Self {
            player1,
            player2,
            target_wins: Self::DEFAULT_TARGET_WINS,
            rounds_played: 0,
        }
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    pub fn target_wins(&self) -> u32 {
        self.target_wins
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Current score as `(player1 wins, player2 wins)`.
    pub fn score(&self) -> (u32, u32) {
        (self.player1.wins, self.player2.wins)
    }

    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<&Player> {
        if self.player1.wins >= self.target_wins {
            Some(&self.player1)
        } else if self.player2.wins >= self.target_wins {
            Some(&self.player2)
        } else {
            None
        }
    }

    /// Score one round: `first` thrown by player 1, `second` by player 2.
    pub fn play_round(&mut self, first: &Roll, second: &Roll) -> GameResult<RoundOutcome> {
        if self.is_decided() {
            return Err(GameError::SeriesDecided);
        }

        let outcome = first.against(second);
        match outcome {
            RoundOutcome::Player1 => self.player1.add_win(),
            RoundOutcome::Player2 => self.player2.add_win(),
            RoundOutcome::Tie => {}
        }
        self.rounds_played += 1;
        Ok(outcome)
    }
}
