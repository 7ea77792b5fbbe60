//! Match overview parser.

use chrono::{DateTime, NaiveDate};
use hltv_types::{MapRecord, MatchRecord, StartingSide, TeamRef, parse_date};
use scraper::{CaseSensitivity, ElementRef, Html};
use tracing::debug;

use crate::error::{PageError, Result};
use crate::select::{attr, first, id_before_slug, id_in_path, number, selector, text_of};

/// Parses a match overview page.
///
/// Only maps that were actually played (those linking to a statistics page) are
/// returned; unplayed picks of a best-of series are skipped. Economy is left
/// empty and filled in separately.
///
/// # Errors
///
/// Returns an error if the date, teams or a played map cannot be read.
pub fn parse_match_page(html: &str) -> Result<MatchRecord> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let canonical = first(&root, "link[rel='canonical']", "canonical link")?;
    let match_id = id_before_slug(attr(&canonical, "href", "canonical href")?, "match id")?;

    let date = parse_match_date(&first(&root, ".date", "match date")?)?;

    let event_id = event_id(&root)?;

    let team_sel = selector(".teamName")?;
    let mut names = root.select(&team_sel).map(|e| text_of(&e));
    let team_1_name = names.next().ok_or(PageError::MissingElement {
        context: "first team name",
    })?;
    let team_2_name = names.next().ok_or(PageError::MissingElement {
        context: "second team name",
    })?;

    let team_1_link = first(&root, ".team1-gradient a", "first team link")?;
    let team_2_link = first(&root, ".team2-gradient a", "second team link")?;
    let team_1 = TeamRef::new(
        id_in_path(attr(&team_1_link, "href", "first team href")?, 2, "first team id")?,
        team_1_name,
    );
    let team_2 = TeamRef::new(
        id_in_path(attr(&team_2_link, "href", "second team href")?, 2, "second team id")?,
        team_2_name,
    );

    let holder_sel = selector(".mapholder")?;
    let stats_sel = selector(".results-stats")?;
    let maps = root
        .select(&holder_sel)
        .filter(|holder| holder.select(&stats_sel).next().is_some())
        .map(|holder| parse_map(&holder))
        .collect::<Result<Vec<_>>>()?;

    debug!(match_id, maps = maps.len(), "parsed match page");
    Ok(MatchRecord {
        match_id,
        date,
        event_id,
        team_1,
        team_2,
        maps,
    })
}

/// Reads the day from the visible text, falling back to the `data-unix` timestamp.
fn parse_match_date(element: &ElementRef<'_>) -> Result<NaiveDate> {
    let text = text_of(element);
    if let Some(date) = parse_date(&text) {
        return Ok(date);
    }
    element
        .value()
        .attr("data-unix")
        .and_then(|ms| ms.parse::<i64>().ok())
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| PageError::invalid("match date", text))
}

fn event_id(root: &ElementRef<'_>) -> Result<Option<u64>> {
    let sel = selector(".event a")?;
    root.select(&sel)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| id_in_path(href, 2, "event id"))
        .transpose()
}

fn parse_map(holder: &ElementRef<'_>) -> Result<MapRecord> {
    let map = text_of(&first(holder, ".mapname", "map name")?).to_lowercase();

    let stats = first(holder, ".results-stats", "map stats link")?;
    let map_stats_id = id_before_slug(attr(&stats, "href", "map stats href")?, "map stats id")?;

    let halves = first(holder, ".results-center-half-score", "half scores")?;
    let span_sel = selector("span")?;
    let opening = halves.select(&span_sel).nth(1).ok_or(PageError::MissingElement {
        context: "first half score",
    })?;
    let starting_side = if opening
        .value()
        .has_class("ct", CaseSensitivity::AsciiCaseInsensitive)
    {
        StartingSide::Team1Ct
    } else {
        StartingSide::Team2Ct
    };

    let ct = side_scores(&halves, ".ct", "ct half score")?;
    let t = side_scores(&halves, ".t", "t half score")?;

    // Scores alternate by half: the first entry of each list belongs to whoever
    // played that side in the first half.
    let (team_1_ct, team_1_t, team_2_ct, team_2_t) = match starting_side {
        StartingSide::Team1Ct => (ct[0], t[1], ct[1], t[0]),
        StartingSide::Team2Ct => (ct[1], t[0], ct[0], t[1]),
    };

    Ok(MapRecord {
        map,
        map_stats_id,
        starting_side,
        team_1_ct,
        team_1_t,
        team_2_ct,
        team_2_t,
        economy: None,
    })
}

/// Returns the first two scores for one side.
fn side_scores(halves: &ElementRef<'_>, css: &'static str, context: &'static str) -> Result<[u32; 2]> {
    let sel = selector(css)?;
    let scores = halves
        .select(&sel)
        .take(2)
        .map(|e| number::<u32>(&text_of(&e), context))
        .collect::<Result<Vec<_>>>()?;
    match scores.as_slice() {
        [first, second] => Ok([*first, *second]),
        _ => Err(PageError::MissingElement { context }),
    }
}
