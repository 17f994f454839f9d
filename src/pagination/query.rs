//! Reading the current page from a request's query string.
//!
//! All correction of user input happens here, at the boundary. The window
//! calculator trusts whatever page number it is handed.

use url::form_urlencoded;

/// Default query parameter carrying the page number.
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Read the current page from a raw query string (without the leading `?`).
///
/// Missing, empty, zero, or non-integer values fall back to page 1. Any other
/// integer, including a negative one, is returned as-is; use [`clamp_page`]
/// to bound it. The first occurrence of `param` wins.
#[must_use]
pub fn current_page_from_query(query: Option<&str>, param: &str) -> i64 {
    query_param(query, param).map_or(1, |value| parse_page(&value))
}

/// First decoded value of `name` in a raw query string.
#[must_use]
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parse a single page value, falling back to 1.
#[must_use]
pub fn parse_page(value: &str) -> i64 {
    match value.trim().parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(page) => page,
    }
}

/// Bound `page` to `1..=total_pages`.
///
/// A non-positive `total_pages` yields 1.
#[must_use]
pub fn clamp_page(page: i64, total_pages: i64) -> i64 {
    page.min(total_pages).max(1)
}
