//! JSON persistence for a fetch cycle.
//!
//! Writes the parsed article list to `{dir}/{YYYY-MM-DD}.json`, one file
//! per day with the latest cycle winning. Consumers get exactly the
//! records the terminal rendered, no envelope.

use chrono::Local;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::Article;

/// Write the article list as a dated JSON file.
///
/// # Arguments
///
/// * `articles` - The records from the current fetch cycle
/// * `json_output_dir` - Base directory for JSON output
///
/// # Errors
///
/// Returns an error if directory creation, serialization or the file
/// write fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_headlines(
    articles: &[Article],
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(articles)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let local_date = Local::now().date_naive();
    let output_path = format!(
        "{}/{}.json",
        json_output_dir.trim_end_matches('/'),
        local_date
    );

    fs::write(&output_path, json).await?;
    info!(path = %output_path, count = articles.len(), "Wrote headlines JSON");

    Ok(())
}
