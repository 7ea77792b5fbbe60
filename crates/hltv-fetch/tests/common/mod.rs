//! Test transports.

#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use hltv_fetch::{ClientConfig, FetchError, HltvClient, RawResponse, RetryPolicy, Transport};
use std::collections::{HashSet, VecDeque};
use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// A request seen by a test transport.
#[derive(Debug, Clone)]
pub struct Call {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub at: Instant,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Replays a fixed sequence of outcomes, one per request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<RawResponse, FetchError>>>,
    calls: Mutex<Vec<Call>>,
    rotations: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<RawResponse, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rotations(&self) -> usize {
        self.rotations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse, FetchError> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            params: params.to_vec(),
            at: Instant::now(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
    }

    fn rotate(&self) {
        self.rotations.fetch_add(1, Ordering::SeqCst);
    }
}

/// A synthetic site serving `total` matches with ids `1000, 1001, ...`.
///
/// The results listing returns up to 100 entries per offset, like the real
/// site. Every match has two played maps with map stats ids `id * 10 + 1` and
/// `id * 10 + 2`, each with `rounds` economy rounds.
#[derive(Debug)]
pub struct FakeSite {
    pub total: usize,
    pub rounds: usize,
    pub failing: HashSet<u64>,
    pub listing_failures_from: Option<usize>,
    pub listing_ids: Option<Vec<u64>>,
    calls: Mutex<Vec<Call>>,
}

pub const FIRST_ID: u64 = 1000;
pub const LISTING_PAGE: usize = 100;

impl FakeSite {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            rounds: 23,
            failing: HashSet::new(),
            listing_failures_from: None,
            listing_ids: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_match(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn failing_listing_from(mut self, offset: usize) -> Self {
        self.listing_failures_from = Some(offset);
        self
    }

    /// Serves exactly `ids` as the listing instead of consecutive ids.
    pub fn with_listing(mut self, ids: Vec<u64>) -> Self {
        self.total = ids.len();
        self.listing_ids = Some(ids);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.calls().iter().filter(|c| c.url.contains(needle)).count()
    }

    fn listing(&self, offset: usize) -> RawResponse {
        if self.listing_failures_from.is_some_and(|from| offset >= from) {
            return RawResponse::new(503, "unavailable");
        }
        let end = self.total.min(offset + LISTING_PAGE);
        match &self.listing_ids {
            Some(ids) => RawResponse::ok(results_page(ids.get(offset..end).unwrap_or(&[]).iter().copied())),
            None => RawResponse::ok(results_page((offset..end).map(|i| FIRST_ID + i as u64))),
        }
    }

    fn detail(&self, url: &str) -> RawResponse {
        let mut segments = url.rsplit('/');
        let _slug = segments.next();
        let id: u64 = segments.next().and_then(|s| s.parse().ok()).unwrap_or_default();
        if url.contains("/mapstatsid/") {
            return RawResponse::ok(economy_page(self.rounds));
        }
        if self.failing.contains(&id) {
            return RawResponse::new(500, "boom");
        }
        RawResponse::ok(match_page(id))
    }
}

#[async_trait]
impl Transport for FakeSite {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse, FetchError> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            params: params.to_vec(),
            at: Instant::now(),
        });
        if url.ends_with("/results") {
            let offset = params
                .iter()
                .find(|(k, _)| k == "offset")
                .and_then(|(_, v)| v.parse().ok())
                .unwrap_or(0);
            return Ok(self.listing(offset));
        }
        // Later ids answer sooner, so completion order is reversed.
        if url.contains("/matches/") {
            let id = url
                .rsplit('/')
                .nth(1)
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(FIRST_ID);
            let delay = 50u64.saturating_sub((id - FIRST_ID) % 50);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(self.detail(url))
    }
}

/// Config with no spacing and instant retries.
pub fn fast_config() -> ClientConfig {
    ClientConfig {
        min_spacing: Duration::ZERO,
        retry: RetryPolicy::none().with_max_retries(1),
        concurrency: 8,
        ..ClientConfig::default()
    }
}

pub fn client_over(transport: Arc<dyn Transport>, config: ClientConfig) -> HltvClient {
    HltvClient::with_transport(config, transport)
}

pub fn results_page(ids: impl Iterator<Item = u64>) -> String {
    let mut entries = String::new();
    for id in ids {
        let _ = write!(
            entries,
            r#"<div class="result-con"><a href="/matches/{id}/team-a-vs-team-b">
                <div class="team1"><div class="team">Team A{id}</div></div>
                <div class="result-score"><span>2</span> - <span>0</span></div>
                <div class="team2"><div class="team">Team B{id}</div></div>
                <span class="event-name">Cup</span><div class="map-text">bo3</div>
            </a></div>"#
        );
    }
    format!(
        r#"<!DOCTYPE html><html><body><div class="allres"><div class="results-sublist">
           <div class="standard-headline">Results for September 2nd 2021</div>{entries}
           </div></div></body></html>"#
    )
}

pub fn match_page(id: u64) -> String {
    let map = |stats_id: u64, name: &str| {
        format!(
            r#"<div class="mapholder"><div class="mapname">{name}</div>
               <a class="results-stats" href="/stats/matches/mapstatsid/{stats_id}/x">stats</a>
               <div class="results-center-half-score"><span> (</span><span class="ct">9</span><span>:</span><span class="t">6</span><span>; </span><span class="t">7</span><span>:</span><span class="ct">5</span><span>)</span></div></div>"#
        )
    };
    format!(
        r#"<!DOCTYPE html><html><head><link rel="canonical" href="https://www.hltv.org/matches/{id}/a-vs-b"></head><body>
           <div class="team1-gradient"><a href="/team/1/a"><div class="teamName">Team A{id}</div></a></div>
           <div class="date" data-unix="1630598400000">2nd of September 2021</div>
           <div class="event"><a href="/events/5553/cup">Cup</a></div>
           <div class="team2-gradient"><a href="/team/2/b"><div class="teamName">Team B{id}</div></a></div>
           {}{}
           <div class="mapholder"><div class="mapname">Inferno</div></div>
           </body></html>"#,
        map(id * 10 + 1, "Nuke"),
        map(id * 10 + 2, "Mirage"),
    )
}

pub fn economy_page(rounds: usize) -> String {
    let first = rounds.min(15);
    let cells = |range: std::ops::Range<usize>, team: u32| {
        range
            .map(|i| {
                let lost = if team == 2 && i % 2 == 0 { " lost" } else { "" };
                format!(
                    r#"<td class="equipment-category-td" title="Equipment value: {}"><img class="equipment-category{lost}"></td>"#,
                    4000 + 100 * i as u32 + team
                )
            })
            .collect::<String>()
    };
    format!(
        r#"<!DOCTYPE html><html><body><table>
           <tr class="team-categories">{}</tr><tr class="team-categories">{}</tr>
           <tr class="team-categories">{}</tr><tr class="team-categories">{}</tr>
           </table></body></html>"#,
        cells(0..first, 1),
        cells(0..first, 2),
        cells(first..rounds, 1),
        cells(first..rounds, 2),
    )
}
