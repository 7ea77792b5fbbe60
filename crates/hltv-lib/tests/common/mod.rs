//! A synthetic site behind the transport seam.

#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use hltv_fetch::{RawResponse, Transport};
use hltv_lib::{ClientConfig, FetchError, HltvClient, RetryPolicy};
use std::fmt::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FIRST_ID: u64 = 2_350_000;

/// Serves `total` listed matches, two played maps each, `rounds` rounds per map.
///
/// `searchTeam?term=navi` answers with ids 4608 and 10371; any other term
/// matches nothing.
#[derive(Debug)]
pub struct Site {
    pub total: usize,
    pub rounds: usize,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl Site {
    pub fn new(total: usize) -> Arc<Self> {
        Arc::new(Self {
            total,
            rounds: 19,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.requests()
            .iter()
            .filter(|(url, _)| url.contains(needle))
            .count()
    }

    fn listing(&self, offset: usize) -> String {
        let mut entries = String::new();
        for i in offset..self.total.min(offset + 100) {
            let id = FIRST_ID + i as u64;
            let _ = write!(
                entries,
                r#"<div class="result-con"><a href="/matches/{id}/a-vs-b">
                    <div class="team1"><div class="team">Alpha</div></div>
                    <div class="result-score"><span>2</span> - <span>1</span></div>
                    <div class="team2"><div class="team">Bravo</div></div>
                    <span class="event-name">Major</span><div class="map-text">bo3</div>
                    <i class="fa fa-star"></i>
                </a></div>"#
            );
        }
        format!(
            r#"<html><body><div class="allres"><div class="results-sublist">
               <div class="standard-headline">Results for September 2nd 2021</div>{entries}
               </div></div></body></html>"#
        )
    }

    fn match_page(id: u64) -> String {
        let map = |stats_id: u64, name: &str| {
            format!(
                r#"<div class="mapholder"><div class="mapname">{name}</div>
                   <a class="results-stats" href="/stats/matches/mapstatsid/{stats_id}/x">stats</a>
                   <div class="results-center-half-score"><span> (</span><span class="t">4</span><span>:</span><span class="ct">11</span><span>; </span><span class="ct">6</span><span>:</span><span class="t">4</span><span>)</span></div></div>"#
            )
        };
        format!(
            r#"<html><head><link rel="canonical" href="https://www.hltv.org/matches/{id}/a-vs-b"></head><body>
               <div class="team1-gradient"><a href="/team/4608/alpha"><div class="teamName">Alpha</div></a></div>
               <div class="date" data-unix="1630598400000">2nd of September 2021</div>
               <div class="event"><a href="/events/5553/major">Major</a></div>
               <div class="team2-gradient"><a href="/team/6667/bravo"><div class="teamName">Bravo</div></a></div>
               {}{}</body></html>"#,
            map(id * 10 + 1, "Ancient"),
            map(id * 10 + 2, "Overpass"),
        )
    }

    fn economy_page(&self) -> String {
        let first = self.rounds.min(15);
        let cells = |range: std::ops::Range<usize>, team: usize| {
            range
                .map(|i| {
                    let lost = if team == 2 && i % 3 == 0 { " lost" } else { "" };
                    format!(
                        r#"<td class="equipment-category-td" title="Equipment value: {}"><img class="equipment-category{lost}"></td>"#,
                        1000 * (i + 1) + team
                    )
                })
                .collect::<String>()
        };
        format!(
            r#"<html><body><table>
               <tr class="team-categories">{}</tr><tr class="team-categories">{}</tr>
               <tr class="team-categories">{}</tr><tr class="team-categories">{}</tr>
               </table></body></html>"#,
            cells(0..first, 1),
            cells(0..first, 2),
            cells(first..self.rounds, 1),
            cells(first..self.rounds, 2),
        )
    }
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[async_trait]
impl Transport for Site {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), params.to_vec()));

        if url.ends_with("/searchTeam") {
            let body = if param(params, "term") == Some("navi") {
                r#"[{"id":4608,"name":"Natus Vincere"},{"id":10371,"name":"Natus Vincere Junior"}]"#
            } else {
                "[]"
            };
            return Ok(RawResponse::ok(body));
        }
        if url.ends_with("/results") {
            let offset = param(params, "offset")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            return Ok(RawResponse::ok(self.listing(offset)));
        }
        if url.contains("/mapstatsid/") {
            return Ok(RawResponse::ok(self.economy_page()));
        }
        if url.contains("/matches/") {
            let id = url
                .rsplit('/')
                .nth(1)
                .and_then(|s| s.parse().ok())
                .unwrap_or(FIRST_ID);
            return Ok(RawResponse::ok(Self::match_page(id)));
        }
        Ok(RawResponse::new(404, "not found"))
    }
}

pub fn client(site: &Arc<Site>) -> HltvClient {
    let config = ClientConfig {
        min_spacing: Duration::ZERO,
        retry: RetryPolicy::none(),
        ..ClientConfig::default()
    };
    HltvClient::with_transport(config, Arc::clone(site) as Arc<dyn Transport>)
}
