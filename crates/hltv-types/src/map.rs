//! Map pool definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::HltvError;

/// A map that can be used as a results filter.
///
/// The set covers every map that has been part of the official competitive pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapName {
    /// de_cache
    Cache,
    /// de_season
    Season,
    /// de_dust2
    Dust2,
    /// de_mirage
    Mirage,
    /// de_inferno
    Inferno,
    /// de_nuke
    Nuke,
    /// de_train
    Train,
    /// de_cobblestone
    Cobblestone,
    /// de_overpass
    Overpass,
    /// de_tuscan
    Tuscan,
    /// de_vertigo
    Vertigo,
    /// de_ancient
    Ancient,
}

impl MapName {
    /// Returns the lowercase map name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Season => "season",
            Self::Dust2 => "dust2",
            Self::Mirage => "mirage",
            Self::Inferno => "inferno",
            Self::Nuke => "nuke",
            Self::Train => "train",
            Self::Cobblestone => "cobblestone",
            Self::Overpass => "overpass",
            Self::Tuscan => "tuscan",
            Self::Vertigo => "vertigo",
            Self::Ancient => "ancient",
        }
    }

    /// Returns the name as sent to the site, e.g. `de_dust2`.
    #[must_use]
    pub fn wire_name(&self) -> String {
        format!("de_{}", self.as_str())
    }

    /// Returns all known maps.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Cache,
            Self::Season,
            Self::Dust2,
            Self::Mirage,
            Self::Inferno,
            Self::Nuke,
            Self::Train,
            Self::Cobblestone,
            Self::Overpass,
            Self::Tuscan,
            Self::Vertigo,
            Self::Ancient,
        ]
    }
}

impl std::fmt::Display for MapName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MapName {
    type Err = HltvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let name = name.strip_prefix("de_").unwrap_or(&name);
        Self::all()
            .iter()
            .copied()
            .find(|map| map.as_str() == name)
            .ok_or_else(|| {
                let known: Vec<_> = Self::all().iter().map(Self::as_str).collect();
                HltvError::invalid_input(
                    "maps",
                    format!("unknown map '{s}'"),
                    format!("one of: {}", known.join(", ")),
                )
            })
    }
}
