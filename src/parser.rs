//! Guardian search response parsing.
//!
//! A pure, single-pass transform from raw JSON text to an ordered list of
//! [`Article`] records. Two surfaces are exposed:
//!
//! - [`parse_headlines`]: the legacy-compatible surface. Any failure
//!   (malformed JSON, missing keys, missing `response.results` path) is
//!   logged and collapsed into an empty list, so the display layer only
//!   ever sees "some articles" or "no articles".
//! - [`try_parse_headlines`]: the typed surface, returning
//!   [`FetchError::Malformed`] with the underlying serde error.
//!
//! # Batch semantics
//!
//! Extraction is all-or-nothing: one element missing a required key fails
//! the whole batch. The envelope is deserialized in one step, so serde
//! enforces this for free; it also matches the original client, which
//! bailed out of the extraction loop on the first bad record.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Article, ContributorTag, RawArticle, SearchEnvelope};
use crate::utils::truncate_for_log;

/// Placeholder author used when an article carries no contributor tag.
pub const DEFAULT_AUTHOR: &str = "Guardian Staff";

/// Separator between display names when an article has several authors.
const AUTHOR_SEPARATOR: &str = " & ";

/// Parse a raw response body into articles, swallowing every failure.
///
/// Empty input, malformed JSON and missing keys all yield an empty list;
/// the cause is logged with a truncated payload preview.
pub fn parse_headlines(payload: &str) -> Vec<Article> {
    match try_parse_headlines(payload) {
        Ok(articles) => articles,
        Err(e) => {
            warn!(
                error = %e,
                payload_preview = %truncate_for_log(payload, 300),
                "Discarding unparseable response"
            );
            Vec::new()
        }
    }
}

/// Parse a raw response body into articles, surfacing the failure cause.
///
/// Empty input is not a failure: it maps to an empty list, matching the
/// fetch layer handing over an empty body after a transport error.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] when the payload is not valid JSON or
/// any element lacks a required key (the whole batch is discarded).
pub fn try_parse_headlines(payload: &str) -> Result<Vec<Article>, FetchError> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    let envelope: SearchEnvelope = serde_json::from_str(payload)?;
    let articles = envelope
        .response
        .results
        .into_iter()
        .map(to_article)
        .collect::<Vec<_>>();
    debug!(count = articles.len(), "Parsed search results");
    Ok(articles)
}

/// Apply the defaulting and truncation rules to one wire element.
fn to_article(raw: RawArticle) -> Article {
    Article {
        title: raw.web_title,
        date: date_portion(&raw.web_publication_date).to_string(),
        url: raw.web_url,
        author: join_contributors(&raw.tags),
        category: raw.section_name,
    }
}

/// Keep the calendar-date portion of a raw timestamp.
///
/// Splits on the literal `T` and keeps what precedes it; a timestamp
/// without a `T` is kept whole, as the original split-based code did.
fn date_portion(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Produce the display author from the contributor tags.
///
/// No tags yields [`DEFAULT_AUTHOR`]; otherwise the display names are
/// joined with `" & "` in array order.
fn join_contributors(tags: &[ContributorTag]) -> String {
    if tags.is_empty() {
        return DEFAULT_AUTHOR.to_string();
    }
    tags.iter()
        .map(|tag| tag.web_title.as_str())
        .collect::<Vec<_>>()
        .join(AUTHOR_SEPARATOR)
}
