//! Synthetic data for the hltv benchmarks.

use async_trait::async_trait;
use chrono::NaiveDate;
use hltv_fetch::PageSource;
use hltv_types::{
    Economy, MapRecord, MatchRecord, Result, ResultRecord, RoundEconomy, StartingSide, TeamRef,
    Winner,
};

const MAPS: [&str; 3] = ["mirage", "inferno", "nuke"];

fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 9, 2)
        .and_then(|d| d.checked_sub_days(chrono::Days::new((i % 365) as u64)))
        .unwrap_or_default()
}

/// `count` listing entries with consecutive ids.
#[must_use]
pub fn sample_results(count: usize) -> Vec<ResultRecord> {
    (0..count)
        .map(|i| ResultRecord {
            match_id: 2_350_000 + i as u64,
            date: day(i),
            event: "IEM Cologne 2021".to_string(),
            team_1: "Natus Vincere".to_string(),
            team_2: "G2".to_string(),
            map: "bo3".to_string(),
            score_1: 2,
            score_2: (i % 2) as u32,
            stars: (i % 6) as u8,
        })
        .collect()
}

fn sample_economy(rounds: usize) -> Economy {
    Economy::new(
        (0..rounds)
            .map(|r| {
                let winner = if r % 3 == 0 { Winner::Team2 } else { Winner::Team1 };
                RoundEconomy::new(4_000 + 150 * r as u32, 3_900 + 170 * r as u32, winner)
            })
            .collect(),
    )
}

/// `count` matches of three maps each, with `rounds` economy rounds per map.
#[must_use]
pub fn sample_matches(count: usize, rounds: usize) -> Vec<MatchRecord> {
    (0..count)
        .map(|i| {
            let match_id = 2_350_000 + i as u64;
            let maps = MAPS
                .iter()
                .enumerate()
                .map(|(m, name)| MapRecord {
                    map: (*name).to_string(),
                    map_stats_id: match_id * 10 + m as u64,
                    starting_side: if m % 2 == 0 {
                        StartingSide::Team1Ct
                    } else {
                        StartingSide::Team2Ct
                    },
                    team_1_ct: 9,
                    team_1_t: 7,
                    team_2_ct: 5,
                    team_2_t: 6,
                    economy: Some(sample_economy(rounds)),
                })
                .collect();
            MatchRecord {
                match_id,
                date: day(i),
                event_id: Some(5553),
                team_1: TeamRef::new(4608, "Natus Vincere"),
                team_2: TeamRef::new(5995, "G2"),
                maps,
            }
        })
        .collect()
}

/// An in-memory listing of `total` ids served in upstream-sized pages.
#[derive(Debug, Clone, Copy)]
pub struct MemorySource {
    /// Number of records available.
    pub total: usize,
}

#[async_trait]
impl PageSource for MemorySource {
    type Record = u64;

    async fn fetch_page(&self, skip: usize, size: usize) -> Result<Vec<u64>> {
        let end = self.total.min(skip.saturating_add(size));
        Ok((skip.min(end)..end).map(|i| i as u64).collect())
    }
}
