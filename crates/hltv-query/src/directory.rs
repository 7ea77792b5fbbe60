//! Name-to-identifier resolution.

use async_trait::async_trait;
use hltv_types::Result;
use std::collections::HashSet;

/// Kind of entity looked up through the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Teams.
    Team,
    /// Players.
    Player,
    /// Events.
    Event,
}

impl SearchKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Player => "player",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A searchable directory of teams, players and events.
///
/// Implemented by the HTTP client against the site's search endpoints.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Returns the identifiers of every entry matching `term`, in the order the
    /// directory lists them. An empty vector means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    async fn search(&self, kind: SearchKind, term: &str) -> Result<Vec<u64>>;
}

/// Removes duplicates while keeping the first occurrence of each id.
#[must_use]
pub fn dedup_ids(ids: impl IntoIterator<Item = u64>) -> Vec<u64> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
