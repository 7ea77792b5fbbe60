//! Results listing parser.

use chrono::NaiveDate;
use hltv_types::{ResultRecord, parse_date};
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{PageError, Result};
use crate::select::{attr, first, first_text, id_in_path, number, selector};

const HEADLINE_PREFIX: &str = "Results for";

/// Parses one page of the results listing.
///
/// Only the chronological listing (`.allres`) is read; the featured block at the
/// top of the first page repeats entries and is skipped. A page without a
/// listing, or with an empty one, yields an empty vector.
///
/// # Errors
///
/// Returns an error if a listed result is missing a required field.
pub fn parse_results_page(html: &str) -> Result<Vec<ResultRecord>> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let listing_sel = selector(".allres")?;
    let Some(listing) = root.select(&listing_sel).next() else {
        debug!("results page has no listing");
        return Ok(Vec::new());
    };

    let sublist_sel = selector(".results-sublist")?;
    let result_sel = selector(".result-con")?;

    let mut records = Vec::new();
    for sublist in listing.select(&sublist_sel) {
        let headline = first_text(&sublist, ".standard-headline", "results day headline")?;
        let day = headline
            .strip_prefix(HEADLINE_PREFIX)
            .unwrap_or(&headline)
            .trim();
        let date = parse_date(day).ok_or_else(|| PageError::invalid("results day", day))?;

        for result in sublist.select(&result_sel) {
            records.push(parse_result(&result, date)?);
        }
    }

    debug!(count = records.len(), "parsed results page");
    Ok(records)
}

fn parse_result(result: &ElementRef<'_>, date: NaiveDate) -> Result<ResultRecord> {
    let link = first(result, "a", "result link")?;
    let match_id = id_in_path(attr(&link, "href", "result link href")?, 2, "result match id")?;

    let team_1 = first_text(result, ".team1 .team", "first team name")?;
    let team_2 = first_text(result, ".team2 .team", "second team name")?;

    let score = first_text(result, ".result-score", "result score")?;
    let (score_1, score_2) = score
        .split_once('-')
        .ok_or_else(|| PageError::invalid("result score", score.as_str()))?;

    let event = first_text(result, ".event-name", "event name")?;
    let map = first_text(result, ".map-text", "map text")?;

    let star_sel = selector(".fa-star")?;
    let stars = result.select(&star_sel).count();

    Ok(ResultRecord {
        match_id,
        date,
        event,
        team_1,
        team_2,
        map,
        score_1: number(score_1, "result score")?,
        score_2: number(score_2, "result score")?,
        stars: u8::try_from(stars).map_err(|_| PageError::invalid("stars", stars.to_string()))?,
    })
}
