//! Search endpoint parser.

use serde::Deserialize;

use crate::error::Result;

/// One entry returned by the team, player or event search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    /// Entity identifier.
    pub id: u64,
    /// Display name, when the endpoint includes it.
    #[serde(default)]
    pub name: Option<String>,
}

/// Parses the JSON array returned by a search endpoint.
///
/// Extra fields on each entry are ignored. An empty array means no match.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of objects with numeric ids.
pub fn parse_search_hits(body: &str) -> Result<Vec<SearchHit>> {
    Ok(serde_json::from_str(body)?)
}
