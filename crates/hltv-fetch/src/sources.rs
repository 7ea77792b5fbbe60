//! Page sources for the results listing and the match detail variants.

use async_trait::async_trait;
use hltv_query::QueryParams;
use hltv_types::{MatchRecord, ResultRecord, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::HltvClient;
use crate::paginate::PageSource;
use crate::stream::fetch_match_details;

/// The results listing, one record per match.
#[derive(Debug, Clone)]
pub struct ResultsSource {
    client: HltvClient,
    params: QueryParams,
}

impl ResultsSource {
    /// Creates a source over already resolved query parameters.
    #[must_use]
    pub const fn new(client: HltvClient, params: QueryParams) -> Self {
        Self { client, params }
    }

    async fn listing(&self, skip: usize, size: usize) -> Result<Vec<ResultRecord>> {
        let mut records = self.client.fetch_results(&self.params.with_offset(skip)).await?;
        records.truncate(size);
        debug!(skip, size, records = records.len(), "results page");
        Ok(records)
    }
}

#[async_trait]
impl PageSource for ResultsSource {
    type Record = ResultRecord;

    async fn fetch_page(&self, skip: usize, size: usize) -> Result<Vec<ResultRecord>> {
        self.listing(skip, size).await
    }
}

/// Match overview records for every match of the results listing.
///
/// Each page of the listing is followed by a concurrent fetch of the match
/// pages it names, and optionally of their map economy pages.
#[derive(Debug, Clone)]
pub struct MatchStatsSource {
    results: ResultsSource,
    with_economy: bool,
    cancel: CancellationToken,
}

impl MatchStatsSource {
    /// Creates a source; `cancel` is checked before every detail fetch.
    #[must_use]
    pub const fn new(
        client: HltvClient,
        params: QueryParams,
        with_economy: bool,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            results: ResultsSource::new(client, params),
            with_economy,
            cancel,
        }
    }
}

#[async_trait]
impl PageSource for MatchStatsSource {
    type Record = MatchRecord;

    async fn fetch_page(&self, skip: usize, size: usize) -> Result<Vec<MatchRecord>> {
        let ids: Vec<u64> = self
            .results
            .listing(skip, size)
            .await?
            .iter()
            .map(|result| result.match_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        fetch_match_details(&self.results.client, &ids, self.with_economy, &self.cancel).await
    }
}
