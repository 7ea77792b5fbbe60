//! Command line arguments shared by several commands.

use clap::{Args, ValueEnum};
use hltv_lib::prelude::*;
use hltv_lib::{SearchKind, SiteConfig};
use std::path::PathBuf;
use std::time::Duration;

use crate::display::Format;

/// Connection settings; every flag falls back to the client default.
#[derive(Args, Debug)]
pub(crate) struct ClientArgs {
    /// Site root, e.g. a mirror or a local fixture server
    #[arg(long, env = "HLTV_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Retries after the first failed attempt
    #[arg(long, global = true)]
    retries: Option<u32>,

    /// Minimum milliseconds between one response and the next request
    #[arg(long, global = true)]
    spacing_ms: Option<u64>,

    /// Maximum concurrent match and economy page fetches
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Proxy URL, repeatable; rotated after each failed attempt
    #[arg(long, global = true)]
    proxy: Vec<String>,
}

impl ClientArgs {
    pub(crate) fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.site = SiteConfig::with_base_url(base_url.as_str());
        }
        if let Some(retries) = self.retries {
            config.retry = RetryPolicy::default().with_max_retries(retries);
        }
        if let Some(ms) = self.spacing_ms {
            config.min_spacing = Duration::from_millis(ms);
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency.max(1);
        }
        config.proxies.clone_from(&self.proxy);
        config
    }
}

/// Filters over the results listing.
#[derive(Args, Debug)]
pub(crate) struct FilterArgs {
    /// First day, inclusive (2021-09-01, "1st Sep 2021", 01/09/2021, ...)
    #[arg(long)]
    start: Option<String>,

    /// Last day, inclusive
    #[arg(long)]
    end: Option<String>,

    /// Map name without prefix, repeatable (mirage, inferno, ...)
    #[arg(long, value_delimiter = ',')]
    map: Vec<String>,

    /// Team identifier, repeatable
    #[arg(long, value_delimiter = ',')]
    team_id: Vec<u64>,

    /// Team name, repeatable; resolved through the site search
    #[arg(long)]
    team: Vec<String>,

    /// Player identifier, repeatable
    #[arg(long, value_delimiter = ',')]
    player_id: Vec<u64>,

    /// Player name, repeatable; resolved through the site search
    #[arg(long)]
    player: Vec<String>,

    /// Event identifier, repeatable
    #[arg(long, value_delimiter = ',')]
    event_id: Vec<u64>,

    /// Event name, repeatable; resolved through the site search
    #[arg(long)]
    event: Vec<String>,

    /// Star rating (1-5)
    #[arg(long)]
    stars: Option<u8>,

    /// lan or online
    #[arg(long)]
    match_type: Option<String>,

    /// Only matches where every listed team plays
    #[arg(long)]
    require_all_teams: bool,

    /// Only matches where every listed player plays
    #[arg(long)]
    require_all_players: bool,
}

impl FilterArgs {
    /// Raw criteria; validated when the operation starts.
    pub(crate) fn query(&self) -> QueryBuilder {
        let mut builder = QueryBuilder::new()
            .maps(self.map.iter().cloned())
            .team_ids(self.team_id.iter().copied())
            .team_names(self.team.iter().cloned())
            .player_ids(self.player_id.iter().copied())
            .player_names(self.player.iter().cloned())
            .event_ids(self.event_id.iter().copied())
            .event_names(self.event.iter().cloned())
            .require_all_teams(self.require_all_teams)
            .require_all_players(self.require_all_players);
        if let Some(start) = &self.start {
            builder = builder.start_date(start.as_str());
        }
        if let Some(end) = &self.end {
            builder = builder.end_date(end.as_str());
        }
        if let Some(stars) = self.stars {
            builder = builder.stars(stars);
        }
        if let Some(match_type) = &self.match_type {
            builder = builder.match_type(match_type.as_str());
        }
        builder
    }
}

/// Which slice of the listing to collect.
#[derive(Args, Debug)]
pub(crate) struct PageArgs {
    /// Listing entries to skip
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Maximum number of matches (all when omitted)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Matches requested per page
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Fail instead of returning partial results when a later page fails
    #[arg(long)]
    strict: bool,
}

impl PageArgs {
    pub(crate) fn options(&self, cancel: CancellationToken) -> FetchOptions {
        let policy = if self.strict {
            FailurePolicy::Strict
        } else {
            FailurePolicy::BestEffort
        };
        let mut options = FetchOptions::new()
            .with_skip(self.skip)
            .with_batch_size(self.batch_size)
            .with_policy(policy)
            .with_cancel(cancel);
        options.limit = self.limit;
        options
    }
}

/// Where and how to write the table.
#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format; inferred from the output extension, else csv
    #[arg(short, long, value_enum)]
    pub(crate) format: Option<Format>,
}

/// Arguments of the listing commands.
#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) filter: FilterArgs,

    #[command(flatten)]
    pub(crate) page: PageArgs,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

/// Searchable entity.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum SearchTarget {
    Team,
    Player,
    Event,
}

impl From<SearchTarget> for SearchKind {
    fn from(target: SearchTarget) -> Self {
        match target {
            SearchTarget::Team => Self::Team,
            SearchTarget::Player => Self::Player,
            SearchTarget::Event => Self::Event,
        }
    }
}
