//! Records produced by the page parsers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Economy;

/// One row of the results listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Match identifier.
    pub match_id: u64,
    /// Day the match was played.
    pub date: NaiveDate,
    /// Event name.
    pub event: String,
    /// First team name.
    pub team_1: String,
    /// Second team name.
    pub team_2: String,
    /// Series format or single map name as listed (e.g. `bo3`, `inferno`).
    pub map: String,
    /// Maps (or rounds, for single-map matches) won by the first team.
    pub score_1: u32,
    /// Maps (or rounds, for single-map matches) won by the second team.
    pub score_2: u32,
    /// Star rating shown next to the result (0 when unrated).
    pub stars: u8,
}

/// A team as referenced from a match page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    /// Team identifier.
    pub id: u64,
    /// Team name.
    pub name: String,
}

impl TeamRef {
    /// Creates a new team reference.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Which team started the map on the counter-terrorist (defending) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingSide {
    /// The first team started on CT.
    Team1Ct,
    /// The second team started on CT.
    Team2Ct,
}

impl StartingSide {
    /// Returns the number of the team that started on CT (1 or 2).
    #[must_use]
    pub const fn ct_team(&self) -> u8 {
        match self {
            Self::Team1Ct => 1,
            Self::Team2Ct => 2,
        }
    }
}

/// Result of one played map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRecord {
    /// Lowercased map name, e.g. `mirage`.
    pub map: String,
    /// Identifier of the map statistics page.
    pub map_stats_id: u64,
    /// Which team started on CT.
    pub starting_side: StartingSide,
    /// Rounds won by team 1 on CT.
    pub team_1_ct: u32,
    /// Rounds won by team 1 on T.
    pub team_1_t: u32,
    /// Rounds won by team 2 on CT.
    pub team_2_ct: u32,
    /// Rounds won by team 2 on T.
    pub team_2_t: u32,
    /// Round economy, when it was requested.
    pub economy: Option<Economy>,
}

impl MapRecord {
    /// Total rounds won by team 1 in regulation halves.
    #[must_use]
    pub const fn team_1_rounds(&self) -> u32 {
        self.team_1_ct + self.team_1_t
    }

    /// Total rounds won by team 2 in regulation halves.
    #[must_use]
    pub const fn team_2_rounds(&self) -> u32 {
        self.team_2_ct + self.team_2_t
    }
}

/// A match with its played maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match identifier.
    pub match_id: u64,
    /// Day the match was played.
    pub date: NaiveDate,
    /// Event identifier.
    pub event_id: Option<u64>,
    /// First team.
    pub team_1: TeamRef,
    /// Second team.
    pub team_2: TeamRef,
    /// Played maps in order; unplayed picks are not included.
    pub maps: Vec<MapRecord>,
}
