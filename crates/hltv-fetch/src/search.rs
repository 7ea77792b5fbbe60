//! Name lookups through the site's search endpoints.

use async_trait::async_trait;
use hltv_pages::{SearchHit, parse_search_hits};
use hltv_query::{Directory, SearchKind};
use hltv_types::Result;
use tracing::debug;

use crate::client::HltvClient;

/// Query parameter carrying the search term.
const TERM_PARAM: &str = "term";

impl HltvClient {
    /// Searches teams, players or events by name, in the order the site lists them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a search result.
    pub async fn search_hits(&self, kind: SearchKind, term: &str) -> Result<Vec<SearchHit>> {
        let url = self.config().site.search_url(kind);
        let body = self
            .fetch(&url, &[(TERM_PARAM.to_string(), term.to_string())])
            .await?;
        let hits = parse_search_hits(&body)?;
        debug!(%kind, term, hits = hits.len(), "search");
        Ok(hits)
    }
}

#[async_trait]
impl Directory for HltvClient {
    async fn search(&self, kind: SearchKind, term: &str) -> Result<Vec<u64>> {
        Ok(self
            .search_hits(kind, term)
            .await?
            .into_iter()
            .map(|hit| hit.id)
            .collect())
    }
}
