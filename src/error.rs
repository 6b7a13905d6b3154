//! Typed failure causes for a fetch cycle.
//!
//! The display layer sees every failure as an empty article list (matching
//! the original client, where "zero results", "network down" and "garbage
//! response" were indistinguishable). This enum is the internal channel that
//! keeps the causes apart for logging and for callers that use the `try_`
//! variants in [`crate::fetch`] and [`crate::parser`].

use thiserror::Error;

/// Everything that can go wrong between building the URL and producing
/// the article list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured base endpoint is not a valid absolute URL.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connection, TLS or timeout failure before a response arrived.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than HTTP 200.
    #[error("unexpected HTTP status {code}")]
    Status { code: u16 },

    /// The body was not valid JSON or did not match the expected shape.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}
