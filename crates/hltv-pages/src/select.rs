//! Small helpers over `scraper` selections.

use scraper::{ElementRef, Selector};

use crate::error::{PageError, Result};

pub(crate) fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| PageError::Selector(format!("{css}: {e}")))
}

/// Trimmed text content of an element.
pub(crate) fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First descendant matching `css`, or a `MissingElement` error.
pub(crate) fn first<'a>(
    element: &ElementRef<'a>,
    css: &'static str,
    context: &'static str,
) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    element
        .select(&sel)
        .next()
        .ok_or(PageError::MissingElement { context })
}

pub(crate) fn first_text(
    element: &ElementRef<'_>,
    css: &'static str,
    context: &'static str,
) -> Result<String> {
    first(element, css, context).map(|e| text_of(&e))
}

pub(crate) fn attr<'a>(
    element: &ElementRef<'a>,
    name: &'static str,
    context: &'static str,
) -> Result<&'a str> {
    element
        .value()
        .attr(name)
        .ok_or(PageError::MissingElement { context })
}

/// Parses the path segment at `index` of a link such as `/team/6651/gambit`.
///
/// Absolute URLs are accepted; the scheme and host are ignored.
pub(crate) fn id_in_path(href: &str, index: usize, context: &'static str) -> Result<u64> {
    let path = href
        .split_once("://")
        .map_or(href, |(_, rest)| rest.find('/').map_or("", |i| &rest[i..]));
    path.split('/')
        .nth(index)
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| PageError::invalid(context, href))
}

/// Parses the second-to-last path segment, e.g. `125815` in `/mapstatsid/125815/foo`.
pub(crate) fn id_before_slug(href: &str, context: &'static str) -> Result<u64> {
    href.trim_end_matches('/')
        .rsplit('/')
        .nth(1)
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| PageError::invalid(context, href))
}

pub(crate) fn number<T: std::str::FromStr>(text: &str, context: &'static str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| PageError::invalid(context, text))
}
