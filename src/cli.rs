//! Command-line interface definitions for Guardian Headlines.
//!
//! Configuration is explicit here rather than read from ambient state:
//! the search term is a positional argument, the API key comes from a
//! flag or the `GUARDIAN_API_KEY` environment variable, and the endpoint
//! is overridable for testing against a stub server.

use clap::Parser;

use crate::query;

/// Command-line arguments for the Guardian Headlines application.
///
/// # Examples
///
/// ```sh
/// # Latest headlines matching a term (uses the public `test` key)
/// guardian_headlines robots
///
/// # Everything, newest first
/// guardian_headlines
///
/// # With a real API key and a JSON copy of the results
/// guardian_headlines robots --api-key YOUR_KEY -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search term; empty matches everything
    #[arg(default_value = "")]
    pub query: String,

    /// Guardian content API key
    #[arg(long, env = "GUARDIAN_API_KEY", default_value = "test")]
    pub api_key: String,

    /// Base endpoint of the search API
    #[arg(long, default_value = query::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Optional output directory for a dated JSON copy of the results
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["guardian_headlines"]);
        assert_eq!(cli.query, "");
        assert_eq!(cli.base_url, query::DEFAULT_BASE_URL);
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_query_and_flags() {
        let cli = Cli::parse_from([
            "guardian_headlines",
            "robots",
            "--api-key",
            "K1",
            "--base-url",
            "http://localhost:8080/search",
            "-j",
            "./json",
        ]);

        assert_eq!(cli.query, "robots");
        assert_eq!(cli.api_key, "K1");
        assert_eq!(cli.base_url, "http://localhost:8080/search");
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
    }
}
