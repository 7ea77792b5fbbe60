//! Calendar date normalization.

use chrono::{NaiveDate, NaiveDateTime};

/// Canonical date format used on the wire and in tables.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Numeric layouts tried before word-based parsing.
///
/// Month-first is tried before day-first, so `01/02/2021` is January 2nd while
/// `15/01/2001` still resolves because 15 is not a valid month.
const NUMERIC_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Layouts tried after ordinals, commas and "of" have been removed.
const WORD_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y", "%B %d %Y", "%b %d %Y", "%Y %B %d"];

/// Formats a date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a free-text date.
///
/// Accepts ISO dates, common numeric layouts and English forms such as
/// `1st Sep 2021`, `September 2nd 2021` or `2nd of September 2021`.
/// Returns `None` if no layout matches.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = NUMERIC_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    {
        return Some(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(datetime.date());
    }

    let normalized = normalize_words(trimmed);
    WORD_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

/// Drops commas, the word "of" and ordinal suffixes: `2nd of September, 2021` -> `2 September 2021`.
fn normalize_words(input: &str) -> String {
    input
        .replace(',', " ")
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("of"))
        .map(strip_ordinal)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_ordinal(token: &str) -> &str {
    let digits = token.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits == token.len() {
        return token;
    }
    let suffix = token[digits..].to_ascii_lowercase();
    if matches!(suffix.as_str(), "st" | "nd" | "rd" | "th") {
        &token[..digits]
    } else {
        token
    }
}
