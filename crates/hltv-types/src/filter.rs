//! Scalar filter values: match type and star rating.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::HltvError;

/// Where a match was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Played at a LAN event.
    Lan,
    /// Played online.
    Online,
}

impl MatchType {
    /// Returns the lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lan => "lan",
            Self::Online => "online",
        }
    }

    /// Returns the value sent in the `matchType` parameter.
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Lan => "Lan",
            Self::Online => "Online",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = HltvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lan" => Ok(Self::Lan),
            "online" => Ok(Self::Online),
            _ => Err(HltvError::invalid_input(
                "match_type",
                format!("unknown match type '{s}'"),
                "one of: lan, online",
            )),
        }
    }
}

/// Star rating assigned to a match, between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a star rating, validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`HltvError::InvalidInput`] if `value` is outside 1..=5.
    pub fn new(value: u8) -> Result<Self, HltvError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(HltvError::invalid_input(
                "stars",
                format!("stars can only be between 1 and 5, got {value}"),
                "integer between 1 and 5 inclusive",
            ))
        }
    }

    /// Returns the rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = HltvError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

impl std::fmt::Display for Stars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
