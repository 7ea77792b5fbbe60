//! Concurrent detail page fan-out.

use futures::stream::{self, StreamExt, TryStreamExt};
use hltv_types::{HltvError, MatchRecord, Result};
use std::collections::{HashMap, HashSet};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::HltvClient;

/// Fetches the overview page of every match in `ids`.
///
/// Match and economy pages share the client's detail permits, so at most
/// `concurrency` of them are in flight at once. Results are keyed by the
/// requested id and returned in the order of `ids`, whatever order the
/// responses arrive in. An id listed twice is fetched once and returned at both
/// positions. When `with_economy` is set, the economy of every played map is
/// fetched as well.
///
/// # Errors
///
/// Returns the first error encountered, or [`HltvError::Cancelled`] if `cancel`
/// fires before a fetch starts.
pub async fn fetch_match_details(
    client: &HltvClient,
    ids: &[u64],
    with_economy: bool,
    cancel: &CancellationToken,
) -> Result<Vec<MatchRecord>> {
    let concurrency = client.config().concurrency.max(1);

    let mut seen = HashSet::new();
    let unique: Vec<u64> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

    let by_id: HashMap<u64, MatchRecord> = stream::iter(unique)
        .map(|id| {
            let client = client.clone();
            let cancel = cancel.clone();
            async move {
                if cancel.is_cancelled() {
                    return Err(HltvError::Cancelled);
                }
                let mut record = client.fetch_match(id).await?;
                if with_economy {
                    attach_economy(&client, &mut record, &cancel).await?;
                }
                Ok((id, record))
            }
        })
        .buffer_unordered(concurrency)
        .try_collect()
        .await?;

    debug!(requested = ids.len(), fetched = by_id.len(), "match details fetched");
    Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
}

/// Fills in the economy of every played map of `record`.
///
/// # Errors
///
/// Returns the first economy page that fails, or [`HltvError::Cancelled`].
pub async fn attach_economy(
    client: &HltvClient,
    record: &mut MatchRecord,
    cancel: &CancellationToken,
) -> Result<()> {
    let concurrency = client.config().concurrency.max(1);
    let map_ids: Vec<u64> = record.maps.iter().map(|map| map.map_stats_id).collect();

    let economies: Vec<_> = stream::iter(map_ids)
        .map(|map_stats_id| {
            let client = client.clone();
            let cancel = cancel.clone();
            async move {
                if cancel.is_cancelled() {
                    return Err(HltvError::Cancelled);
                }
                client.fetch_economy(map_stats_id).await
            }
        })
        .buffered(concurrency)
        .try_collect()
        .await?;

    for (map, economy) in record.maps.iter_mut().zip(economies) {
        map.economy = Some(economy);
    }
    Ok(())
}
