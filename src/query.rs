//! Search URL construction for the Guardian content API.
//!
//! Pure string work, no network access. The query always carries the same
//! fixed parameters (`show-tags=contributor`, `order-by=newest`,
//! `page-size=20`) plus the caller's API key and search term; the search
//! term may be empty and is passed through unmodified. Encoding is handled
//! by the `url` crate's query-pair serializer.

use url::Url;

use crate::error::FetchError;

/// Default search endpoint of the Guardian content API.
pub const DEFAULT_BASE_URL: &str = "http://content.guardianapis.com/search";

/// Ask the API to include contributor tags so authors can be extracted.
const SHOW_TAGS: &str = "contributor";

/// Newest articles first.
const ORDER_BY: &str = "newest";

/// Fixed page size; no pagination beyond the first page.
const PAGE_SIZE: &str = "20";

/// Build the absolute search URL for one fetch cycle.
///
/// # Arguments
///
/// * `base` - The search endpoint (normally [`DEFAULT_BASE_URL`])
/// * `api_key` - The Guardian API key
/// * `term` - Free-text search term; empty means "everything"
///
/// # Errors
///
/// Returns [`FetchError::Url`] when `base` is not a valid absolute URL.
pub fn build_search_url(base: &str, api_key: &str, term: &str) -> Result<String, FetchError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("api-key", api_key)
        .append_pair("q", term)
        .append_pair("show-tags", SHOW_TAGS)
        .append_pair("order-by", ORDER_BY)
        .append_pair("page-size", PAGE_SIZE);
    Ok(url.into())
}
