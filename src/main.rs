//! # Guardian Headlines
//!
//! A small client for the Guardian content API: build one search URL,
//! perform one GET, parse the JSON response into article records, and
//! render them as a list. Selecting an article is the reader's job; the
//! URL printed with each headline is the hand-off point.
//!
//! ## Usage
//!
//! ```sh
//! guardian_headlines robots
//! ```
//!
//! ## Architecture
//!
//! One fetch cycle per run, no internal parallelism:
//! 1. **Build**: compose the search URL from endpoint, API key and term
//! 2. **Fetch**: one GET with fixed timeouts, no retries
//! 3. **Parse**: JSON body → ordered `Vec<Article>` with defaulting rules
//! 4. **Render**: terminal list, plus an optional dated JSON file
//!
//! Every failure degrades to an empty list; causes are kept apart on an
//! internal typed error channel and in the logs.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod fetch;
mod models;
mod outputs;
mod parser;
mod query;
mod render;
mod utils;

use cli::Cli;
use fetch::NewsClient;
use query::build_search_url;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("guardian_headlines starting up");

    let args = Cli::parse();
    debug!(query = %args.query, base_url = %args.base_url, "Parsed CLI arguments");

    // Early check: a bad output path should fail before the fetch runs.
    if let Some(ref json_output_dir) = args.json_output_dir {
        if let Err(e) = ensure_writable_dir(json_output_dir).await {
            error!(
                path = %json_output_dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- One fetch cycle ----
    let url = build_search_url(&args.base_url, &args.api_key, &args.query)?;
    info!(%url, "Built search URL");

    let client = NewsClient::new()?;
    let articles = client.fetch_headlines(&url).await;

    println!("{}", render::render_list(&articles));

    if let Some(ref json_output_dir) = args.json_output_dir {
        if let Err(e) = outputs::json::write_headlines(&articles, json_output_dir).await {
            error!(error = %e, "Failed to write headlines JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        count = articles.len(),
        "Execution complete"
    );

    Ok(())
}
