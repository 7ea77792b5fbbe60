//! Top-level operations: query in, table out.

use hltv_fetch::{
    CancellationToken, HltvClient, MatchStatsSource, ResultsSource, attach_economy, paginate,
};
use hltv_query::QueryParams;
use hltv_table::{Table, economy_table, matches_table, results_table, rounds_table};
use hltv_types::{HltvError, MatchRecord, Result};
use tracing::{debug, info, instrument};

use crate::options::{FetchOptions, IntoQuery};

/// Validates the query and resolves its names.
///
/// Returns `None` when the options ask for nothing, before any request.
async fn resolve_params(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Option<QueryParams>> {
    let query = query.into_query()?;
    if options.limit == Some(0) {
        debug!("zero limit, nothing to fetch");
        return Ok(None);
    }
    if query.needs_resolution() {
        debug!("resolving names");
    }
    query.to_params(client).await.map(Some)
}

/// Collects the results listing.
///
/// A limit of zero returns an empty table without any request.
///
/// # Errors
///
/// Returns an error if the query is invalid, a name lookup fails, or a page
/// fails under the options' failure policy.
#[instrument(skip_all, fields(offset = options.skip, limit = ?options.limit))]
pub async fn get_results(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Table> {
    let Some(params) = resolve_params(client, query, options).await? else {
        return Ok(results_table(&[]));
    };
    let source = ResultsSource::new(client.clone(), params);
    let records = paginate(&source, options.pagination(), options.policy, &options.cancel).await?;
    info!(records = records.len(), "results collected");
    Ok(results_table(&records))
}

/// Collects the identifiers of every listed match, in listing order.
///
/// # Errors
///
/// Same as [`get_results`].
#[instrument(skip_all, fields(offset = options.skip, limit = ?options.limit))]
pub async fn get_match_ids(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Vec<u64>> {
    let Some(params) = resolve_params(client, query, options).await? else {
        return Ok(Vec::new());
    };
    let source = ResultsSource::new(client.clone(), params);
    let ids: Vec<u64> = paginate(&source, options.pagination(), options.policy, &options.cancel)
        .await?
        .into_iter()
        .map(|record| record.match_id)
        .collect();
    info!(ids = ids.len(), "match ids collected");
    Ok(ids)
}

/// Collects parsed match records, optionally with the economy of every map.
///
/// The limit counts matches, not maps.
///
/// # Errors
///
/// Same as [`get_results`]; a failed match or economy page fails its whole
/// listing page.
#[instrument(skip_all, fields(offset = options.skip, limit = ?options.limit, with_economy = with_economy))]
pub async fn get_match_records(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
    with_economy: bool,
) -> Result<Vec<MatchRecord>> {
    let Some(params) = resolve_params(client, query, options).await? else {
        return Ok(Vec::new());
    };
    let source = MatchStatsSource::new(client.clone(), params, with_economy, options.cancel.clone());
    let records = paginate(&source, options.pagination(), options.policy, &options.cancel).await?;
    info!(matches = records.len(), "match records collected");
    Ok(records)
}

/// Collects one row per played map of every listed match.
///
/// # Errors
///
/// Same as [`get_match_records`].
pub async fn get_matches_stats(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Table> {
    let records = get_match_records(client, query, options, false).await?;
    Ok(matches_table(&records))
}

/// Collects one row per played map with thirty round economy slots.
///
/// # Errors
///
/// Same as [`get_match_records`].
pub async fn get_matches_with_economy(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Table> {
    let records = get_match_records(client, query, options, true).await?;
    Ok(economy_table(&records))
}

/// Collects one row per played round of every listed match.
///
/// # Errors
///
/// Same as [`get_match_records`].
pub async fn get_rounds(
    client: &HltvClient,
    query: impl IntoQuery,
    options: &FetchOptions,
) -> Result<Table> {
    let records = get_match_records(client, query, options, true).await?;
    Ok(rounds_table(&records))
}

/// Fetches one match and returns its played maps.
///
/// # Errors
///
/// Returns an error if the match page cannot be fetched or parsed.
#[instrument(skip(client))]
pub async fn get_match_stats_by_id(client: &HltvClient, match_id: u64) -> Result<Table> {
    let record = client.fetch_match(match_id).await?;
    Ok(matches_table(std::slice::from_ref(&record)))
}

/// Fetches one match with the economy of each played map.
///
/// `cancel` is checked before the match page and before every economy page.
///
/// # Errors
///
/// Returns an error if the match page or any economy page fails, or
/// [`HltvError::Cancelled`].
#[instrument(skip(client, cancel))]
pub async fn get_economy_by_match_id(
    client: &HltvClient,
    match_id: u64,
    cancel: &CancellationToken,
) -> Result<Table> {
    if cancel.is_cancelled() {
        return Err(HltvError::Cancelled);
    }
    let mut record = client.fetch_match(match_id).await?;
    attach_economy(client, &mut record, cancel).await?;
    info!(maps = record.maps.len(), "economy collected");
    Ok(economy_table(std::slice::from_ref(&record)))
}
