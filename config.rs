// Command-line and environment configuration
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::error::{NlSearchError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PATH: &str = "/api/nl-search";
pub const DEFAULT_QUERY: &str =
    "Show me all delivered parcels at Location A excluding expired parcels";

/// Send one natural-language query to an nl-search endpoint and print the reply.
#[derive(Parser, Debug, Clone)]
#[command(name = "nl-search", version)]
pub struct RunnerConfig {
    /// Scheme, host and port of the service
    #[arg(long, env = "NL_SEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "NL_SEARCH_PATH", default_value = DEFAULT_PATH)]
    pub path: String,

    /// Free-text query sent as {"query": ...}
    #[arg(short, long, env = "NL_SEARCH_QUERY", default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Request timeout. Unset means wait indefinitely.
    #[arg(long, env = "NL_SEARCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Indent JSON bodies
    #[arg(long)]
    pub pretty: bool,

    /// Also print inferred filters, warnings and follow-up
    #[arg(long)]
    pub summary: bool,
}

impl RunnerConfig {
    pub fn new(base_url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: DEFAULT_PATH.to_string(),
            query: query.into(),
            timeout_secs: None,
            pretty: false,
            summary: false,
        }
    }

    pub fn endpoint(&self) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let url = Url::parse(&joined).map_err(|source| NlSearchError::InvalidEndpoint {
            url: joined,
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(NlSearchError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
