//! Data models for Guardian search results.
//!
//! Two layers live here:
//! - [`Article`]: the parsed record handed to the display layer, with every
//!   field guaranteed populated.
//! - Wire types ([`SearchEnvelope`], [`SearchResults`], [`RawArticle`],
//!   [`ContributorTag`]): a serde mirror of the Guardian API response shape
//!   `{ "response": { "results": [ ... ] } }`.
//!
//! The wire types use camelCase renames to match the JSON keys the API
//! returns; the defaulting and date-truncation rules that turn a
//! [`RawArticle`] into an [`Article`] live in [`crate::parser`].

use serde::{Deserialize, Serialize};

/// A single news article as shown to the reader.
///
/// Constructed fresh on every fetch cycle and replaced wholesale on the
/// next one. All fields are always populated; `author` falls back to a
/// fixed placeholder when the API reports no contributor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// Publication date in `YYYY-MM-DD` form (time-of-day discarded).
    pub date: String,
    /// Absolute URL used to open the article externally.
    pub url: String,
    /// Display name(s) of the author(s), `" & "`-joined when there are
    /// several, or the placeholder when there are none.
    pub author: String,
    /// Guardian section name (e.g. "World news").
    pub category: String,
}

/// Top-level wrapper of the Guardian search response.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    /// The `response` object containing the result array.
    pub response: SearchResults,
}

/// The `response` object; only the result array matters here.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    /// Matching articles in API order (newest first per the query).
    pub results: Vec<RawArticle>,
}

/// One unparsed article element from the `results` array.
///
/// Every field is required: a missing key fails deserialization of the
/// whole envelope, which is the batch-abort contract the parser relies on.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    /// The article headline.
    #[serde(rename = "webTitle")]
    pub web_title: String,
    /// Raw ISO-8601-like publication timestamp, e.g. `2020-01-02T10:00:00Z`.
    #[serde(rename = "webPublicationDate")]
    pub web_publication_date: String,
    /// Absolute article URL.
    #[serde(rename = "webUrl")]
    pub web_url: String,
    /// Section the article was filed under.
    #[serde(rename = "sectionName")]
    pub section_name: String,
    /// Contributor tags, present (possibly empty) because the query asks
    /// for `show-tags=contributor`.
    pub tags: Vec<ContributorTag>,
}

/// A contributor tag naming one author of an article.
#[derive(Debug, Deserialize)]
pub struct ContributorTag {
    /// The contributor's display name.
    #[serde(rename = "webTitle")]
    pub web_title: String,
}
