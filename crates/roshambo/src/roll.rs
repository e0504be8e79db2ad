use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// A throwable move, defined by the moves it defeats and loses to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub name: String,
    pub wins_against: Vec<String>,
    pub lose_against: Vec<String>,
}

impl Roll {
    pub fn new(
        name: impl Into<String>,
        wins_against: &[&str],
        lose_against: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            wins_against: wins_against.iter().map(|s| s.to_string()).collect(),
            lose_against: lose_against.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn beats(&self, other: &Roll) -> bool {
        self.wins_against.iter().any(|name| name == &other.name)
    }

    pub fn loses_to(&self, other: &Roll) -> bool {
        self.lose_against.iter().any(|name| name == &other.name)
    }

    /// Outcome of `self` (thrown by player 1) against `other`.
    ///
    /// Identical names tie; otherwise the win/lose lists decide. A pair
    /// related by neither list also ties.
    pub fn against(&self, other: &Roll) -> RoundOutcome {
        if self.name == other.name {
            RoundOutcome::Tie
        } else if self.beats(other) {
            RoundOutcome::Player1
        } else if self.loses_to(other) {
            RoundOutcome::Player2
        } else {
            RoundOutcome::Tie
        }
    }
}

/// Outcome of a single round between two rolls.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Player1,
    Player2,
    Tie,
}

/// The 15-move circle. Each move defeats the seven that follow it.
const EXTENDED_CIRCLE: [&str; 15] = [
    "rock", "fire", "scissors", "snake", "human", "tree", "wolf", "sponge", "paper", "air",
    "water", "dragon", "devil", "lightning", "gun",
];

/// A validated set of rolls forming a playable game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    rolls: Vec<Roll>,
}

impl Ruleset {
    /// Build a ruleset from arbitrary rolls, checking consistency.
    ///
    /// Names must be unique, every referenced name must exist, no roll may
    /// reference itself, and no name may appear in both lists of one roll.
    pub fn new(rolls: Vec<Roll>) -> GameResult<Self> {
        for (i, roll) in rolls.iter().enumerate() {
            if rolls[..i].iter().any(|other| other.name == roll.name) {
                return Err(GameError::invalid_ruleset(format!(
                    "duplicate roll name `{}`",
                    roll.name
                )));
            }
            for referenced in roll.wins_against.iter().chain(&roll.lose_against) {
                if referenced == &roll.name {
                    return Err(GameError::invalid_ruleset(format!(
                        "roll `{}` references itself",
                        roll.name
                    )));
                }
                if !rolls.iter().any(|other| &other.name == referenced) {
                    return Err(GameError::invalid_ruleset(format!(
                        "roll `{}` references unknown roll `{referenced}`",
                        roll.name
                    )));
                }
            }
            for name in &roll.wins_against {
                if roll.lose_against.contains(name) {
                    return Err(GameError::invalid_ruleset(format!(
                        "roll `{}` lists `{name}` as both win and loss",
                        roll.name
                    )));
                }
            }
        }
        Ok(Self { rolls })
    }

    /// The three classic rolls.
    pub fn classic() -> Self {
        Self {
            rolls: vec![
                Roll::new("rock", &["scissors"], &["paper"]),
                Roll::new("paper", &["rock"], &["scissors"]),
                Roll::new("scissors", &["paper"], &["rock"]),
            ],
        }
    }

    /// The 15-move variant, generated from the circle order.
    pub fn extended() -> Self {
        let n = EXTENDED_CIRCLE.len();
        let half = n / 2;
        let rolls = EXTENDED_CIRCLE
            .iter()
            .enumerate()
            .map(|(i, name)| Roll {
                name: name.to_string(),
                wins_against: (1..=half)
                    .map(|d| EXTENDED_CIRCLE[(i + d) % n].to_string())
                    .collect(),
                lose_against: (1..=half)
                    .map(|d| EXTENDED_CIRCLE[(i + n - d) % n].to_string())
                    .collect(),
            })
            .collect();
        Self { rolls }
    }

    /// All rolls, in ruleset order.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Look up a roll by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> GameResult<&Roll> {
        let wanted = name.trim().to_lowercase();
        self.rolls
            .iter()
            .find(|roll| roll.name.to_lowercase() == wanted)
            .ok_or_else(|| GameError::UnknownRoll(name.trim().to_string()))
    }

    /// Decide a round: `first` thrown by player 1, `second` by player 2.
    pub fn resolve(&self, first: &Roll, second: &Roll) -> RoundOutcome {
        first.against(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_relations_hold() {
        let rules = Ruleset::classic();
        let rock = rules.find("rock").unwrap();
        let paper = rules.find("paper").unwrap();
        let scissors = rules.find("scissors").unwrap();

        assert!(rock.beats(scissors));
        assert!(paper.beats(rock));
        assert!(scissors.beats(paper));
        assert!(rock.loses_to(paper));
    }

    #[test]
    fn identical_rolls_tie() {
        let rules = Ruleset::classic();
        let rock = rules.find("rock").unwrap();
        assert_eq!(rules.resolve(rock, rock), RoundOutcome::Tie);
    }

    #[test]
    fn resolve_decides_by_win_lists() {
        let rules = Ruleset::classic();
        let rock = rules.find("rock").unwrap();
        let paper = rules.find("paper").unwrap();
        let scissors = rules.find("scissors").unwrap();

        assert_eq!(rules.resolve(rock, scissors), RoundOutcome::Player1);
        assert_eq!(rules.resolve(rock, paper), RoundOutcome::Player2);
        assert_eq!(rules.resolve(scissors, rock), RoundOutcome::Player2);
        assert_eq!(rock.against(scissors), RoundOutcome::Player1);
    }

    #[test]
    fn extended_has_fifteen_balanced_rolls() {
        let rules = Ruleset::extended();
        assert_eq!(rules.len(), 15);
        for roll in rules.rolls() {
            assert_eq!(roll.wins_against.len(), 7, "roll `{}`", roll.name);
            assert_eq!(roll.lose_against.len(), 7, "roll `{}`", roll.name);
        }
    }

    #[test]
    fn extended_decides_every_distinct_pair() {
        let rules = Ruleset::extended();
        for a in rules.rolls() {
            for b in rules.rolls() {
                if a.name == b.name {
                    continue;
                }
                assert_ne!(
                    a.beats(b),
                    b.beats(a),
                    "pair `{}` vs `{}` must have exactly one winner",
                    a.name,
                    b.name
                );
                if a.beats(b) {
                    assert!(b.loses_to(a));
                }
            }
        }
    }

    #[test]
    fn extended_embeds_the_classic_relations() {
        let rules = Ruleset::extended();
        let rock = rules.find("rock").unwrap();
        let paper = rules.find("paper").unwrap();
        let scissors = rules.find("scissors").unwrap();

        assert!(rock.beats(scissors));
        assert!(paper.beats(rock));
        assert!(scissors.beats(paper));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let rules = Ruleset::classic();
        assert_eq!(rules.find("  RoCk ").unwrap().name, "rock");

        let err = rules.find("lizard").unwrap_err();
        assert_eq!(err, GameError::UnknownRoll("lizard".to_string()));
    }

    #[test]
    fn ruleset_rejects_unknown_references() {
        let err = Ruleset::new(vec![Roll::new("rock", &["lizard"], &[])]).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleset(_)));
    }

    #[test]
    fn ruleset_rejects_self_reference() {
        let err = Ruleset::new(vec![Roll::new("rock", &["rock"], &[])]).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleset(_)));
    }

    #[test]
    fn ruleset_rejects_contradictory_entries() {
        let rolls = vec![
            Roll::new("rock", &["scissors"], &["scissors"]),
            Roll::new("scissors", &[], &[]),
        ];
        let err = Ruleset::new(rolls).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleset(_)));
    }

    #[test]
    fn ruleset_rejects_duplicate_names() {
        let rolls = vec![Roll::new("rock", &[], &[]), Roll::new("rock", &[], &[])];
        let err = Ruleset::new(rolls).unwrap_err();
        assert!(matches!(err, GameError::InvalidRuleset(_)));
    }

    #[test]
    fn generated_rulesets_pass_their_own_validation() {
        assert!(Ruleset::new(Ruleset::classic().rolls().to_vec()).is_ok());
        assert!(Ruleset::new(Ruleset::extended().rolls().to_vec()).is_ok());
    }
}
