//! Query construction and validation.

use chrono::{NaiveDate, NaiveDateTime};
use hltv_types::{HltvError, MapName, MatchType, Result, Stars, format_date, parse_date};
use tracing::{debug, warn};

use crate::directory::{Directory, SearchKind, dedup_ids};
use crate::params::{FLAG_VALUE, QueryParams, keys};

/// A date given either as free text or as an already typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Free text, parsed permissively when the query is built.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
}

impl DateInput {
    fn resolve(&self, field: &'static str) -> Result<NaiveDate> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date(text).ok_or_else(|| {
                HltvError::invalid_input(
                    field,
                    format!("could not parse date '{text}'"),
                    "a calendar date such as 2021-09-02 or 2nd Sep 2021",
                )
            }),
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Date(datetime.date())
    }
}

/// Raw, unvalidated filter criteria.
///
/// Every setter takes and returns `self`; call [`QueryBuilder::build`] to validate.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    match_type: Option<String>,
    start_date: Option<DateInput>,
    end_date: Option<DateInput>,
    maps: Vec<String>,
    event_ids: Vec<u64>,
    event_names: Vec<String>,
    player_ids: Vec<u64>,
    player_names: Vec<String>,
    team_ids: Vec<u64>,
    team_names: Vec<String>,
    stars: Option<u8>,
    require_all_teams: bool,
    require_all_players: bool,
}

impl QueryBuilder {
    /// Creates a builder with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to LAN or online matches.
    #[must_use]
    pub fn match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = Some(match_type.into());
        self
    }

    /// Sets the first day of the range (inclusive).
    #[must_use]
    pub fn start_date(mut self, date: impl Into<DateInput>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Sets the last day of the range (inclusive).
    #[must_use]
    pub fn end_date(mut self, date: impl Into<DateInput>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Adds maps; only matches including them are returned.
    #[must_use]
    pub fn maps<I, S>(mut self, maps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.maps.extend(maps.into_iter().map(Into::into));
        self
    }

    /// Adds event identifiers.
    #[must_use]
    pub fn event_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.event_ids.extend(ids);
        self
    }

    /// Adds event names, resolved to identifiers when parameters are built.
    #[must_use]
    pub fn event_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds player identifiers.
    #[must_use]
    pub fn player_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.player_ids.extend(ids);
        self
    }

    /// Adds player names, resolved to identifiers when parameters are built.
    #[must_use]
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds team identifiers.
    #[must_use]
    pub fn team_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.team_ids.extend(ids);
        self
    }

    /// Adds team names, resolved to identifiers when parameters are built.
    #[must_use]
    pub fn team_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Only returns matches with this star rating.
    #[must_use]
    pub const fn stars(mut self, stars: u8) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Only returns matches where every listed team plays.
    #[must_use]
    pub const fn require_all_teams(mut self, require: bool) -> Self {
        self.require_all_teams = require;
        self
    }

    /// Only returns matches where every listed player is in the line-up.
    #[must_use]
    pub const fn require_all_players(mut self, require: bool) -> Self {
        self.require_all_players = require;
        self
    }

    /// Validates the criteria and produces an immutable [`Query`].
    ///
    /// No request is made; names are kept for later resolution.
    ///
    /// # Errors
    ///
    /// Returns [`HltvError::InvalidInput`] for an unknown match type, an unknown
    /// map, a star rating outside 1..=5 or an unparseable date.
    pub fn build(self) -> Result<Query> {
        let match_type = self
            .match_type
            .as_deref()
            .map(str::parse::<MatchType>)
            .transpose()?;

        let start_date = self
            .start_date
            .as_ref()
            .map(|d| d.resolve("start_date"))
            .transpose()?;
        let end_date = self
            .end_date
            .as_ref()
            .map(|d| d.resolve("end_date"))
            .transpose()?;

        let maps = self
            .maps
            .iter()
            .map(|m| m.parse::<MapName>())
            .collect::<Result<Vec<_>>>()?;

        let stars = self.stars.map(Stars::new).transpose()?;

        Ok(Query {
            match_type,
            start_date: start_date.map(format_date),
            end_date: end_date.map(format_date),
            maps,
            event_ids: self.event_ids,
            event_names: self.event_names,
            player_ids: self.player_ids,
            player_names: self.player_names,
            team_ids: self.team_ids,
            team_names: self.team_names,
            stars,
            require_all_teams: self.require_all_teams,
            require_all_players: self.require_all_players,
        })
    }
}

/// A validated, immutable filter over the results listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    match_type: Option<MatchType>,
    start_date: Option<String>,
    end_date: Option<String>,
    maps: Vec<MapName>,
    event_ids: Vec<u64>,
    event_names: Vec<String>,
    player_ids: Vec<u64>,
    player_names: Vec<String>,
    team_ids: Vec<u64>,
    team_names: Vec<String>,
    stars: Option<Stars>,
    require_all_teams: bool,
    require_all_players: bool,
}

impl Query {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Returns the match type filter.
    #[must_use]
    pub const fn match_type(&self) -> Option<MatchType> {
        self.match_type
    }

    /// Returns the canonical start date.
    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    /// Returns the canonical end date.
    #[must_use]
    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    /// Returns the map filter.
    #[must_use]
    pub fn maps(&self) -> &[MapName] {
        &self.maps
    }

    /// Returns the star rating filter.
    #[must_use]
    pub const fn stars(&self) -> Option<Stars> {
        self.stars
    }

    /// Returns true if building parameters requires directory lookups.
    #[must_use]
    pub fn needs_resolution(&self) -> bool {
        !(self.event_names.is_empty() && self.player_names.is_empty() && self.team_names.is_empty())
    }

    /// Builds the wire parameters, resolving names through `directory`.
    ///
    /// Explicit ids come first, followed by resolved ids in search order; each
    /// list is deduplicated keeping the first occurrence. A name that matches
    /// nothing contributes no ids and is logged. Absent filters and false
    /// require-all flags are omitted entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory lookup fails.
    pub async fn to_params(&self, directory: &dyn Directory) -> Result<QueryParams> {
        let events = resolve(directory, SearchKind::Event, &self.event_ids, &self.event_names).await?;
        let players =
            resolve(directory, SearchKind::Player, &self.player_ids, &self.player_names).await?;
        let teams = resolve(directory, SearchKind::Team, &self.team_ids, &self.team_names).await?;

        let mut params = QueryParams::new();
        if let Some(start) = &self.start_date {
            params.push(keys::START_DATE, start);
        }
        if let Some(end) = &self.end_date {
            params.push(keys::END_DATE, end);
        }
        params.extend(keys::MAP, self.maps.iter().map(MapName::wire_name));
        params.extend(keys::EVENT, events);
        params.extend(keys::PLAYER, players);
        params.extend(keys::TEAM, teams);
        if let Some(stars) = self.stars {
            params.push(keys::STARS, stars);
        }
        if let Some(match_type) = self.match_type {
            params.push(keys::MATCH_TYPE, match_type.wire_value());
        }
        if self.require_all_teams {
            params.push(keys::REQUIRE_ALL_TEAMS, FLAG_VALUE);
        }
        if self.require_all_players {
            params.push(keys::REQUIRE_ALL_PLAYERS, FLAG_VALUE);
        }
        Ok(params)
    }
}

impl TryFrom<QueryBuilder> for Query {
    type Error = HltvError;

    fn try_from(builder: QueryBuilder) -> Result<Self> {
        builder.build()
    }
}

async fn resolve(
    directory: &dyn Directory,
    kind: SearchKind,
    ids: &[u64],
    names: &[String],
) -> Result<Vec<u64>> {
    let mut combined = ids.to_vec();
    for name in names {
        let found = directory.search(kind, name).await?;
        if found.is_empty() {
            warn!(%kind, name = name.as_str(), "name matched no identifiers; filter ignored");
        } else {
            debug!(%kind, name = name.as_str(), count = found.len(), "resolved name");
        }
        combined.extend(found);
    }
    Ok(dedup_ids(combined))
}
