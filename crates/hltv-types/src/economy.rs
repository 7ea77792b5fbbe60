//! Round-by-round economy breakdown of a played map.

use serde::{Deserialize, Serialize};

/// Number of round slots in the economy schema (regulation time).
pub const ROUND_SLOTS: usize = 30;

/// Which team won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Winner {
    /// The first listed team won the round.
    Team1,
    /// The second listed team won the round.
    Team2,
}

impl Winner {
    /// Returns 1 or 2.
    #[must_use]
    pub const fn as_number(&self) -> u8 {
        match self {
            Self::Team1 => 1,
            Self::Team2 => 2,
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> Self {
        winner.as_number()
    }
}

impl TryFrom<u8> for Winner {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Team1),
            2 => Ok(Self::Team2),
            other => Err(format!("winner must be 1 or 2, got {other}")),
        }
    }
}

/// Equipment values and outcome of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEconomy {
    /// Total equipment value of the first team.
    pub team_1_value: u32,
    /// Total equipment value of the second team.
    pub team_2_value: u32,
    /// Round winner.
    pub winner: Winner,
}

impl RoundEconomy {
    /// Creates a new round entry.
    #[must_use]
    pub const fn new(team_1_value: u32, team_2_value: u32, winner: Winner) -> Self {
        Self {
            team_1_value,
            team_2_value,
            winner,
        }
    }
}

/// Economy breakdown for the rounds actually played on a map.
///
/// At most [`ROUND_SLOTS`] rounds are kept; slots past the last played round are
/// reported as absent by [`Economy::slot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    rounds: Vec<RoundEconomy>,
}

impl Economy {
    /// Creates an economy from played rounds, dropping anything past [`ROUND_SLOTS`].
    #[must_use]
    pub fn new(mut rounds: Vec<RoundEconomy>) -> Self {
        rounds.truncate(ROUND_SLOTS);
        Self { rounds }
    }

    /// Returns the played rounds in order.
    #[must_use]
    pub fn rounds(&self) -> &[RoundEconomy] {
        &self.rounds
    }

    /// Returns the number of played rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns true if no round was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Returns the round at a 1-based slot index, or `None` if it was not played.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&RoundEconomy> {
        index.checked_sub(1).and_then(|i| self.rounds.get(i))
    }

    /// Iterates over all [`ROUND_SLOTS`] slots, yielding `None` for unplayed rounds.
    pub fn slots(&self) -> impl Iterator<Item = Option<&RoundEconomy>> + '_ {
        (1..=ROUND_SLOTS).map(|index| self.slot(index))
    }
}
