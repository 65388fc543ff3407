// nl-search runner: send one natural-language query, print what came back
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod search;

use std::io::Write;

pub use config::RunnerConfig;
pub use error::{NlSearchError, Result};
pub use report::{print_report, print_summary};
pub use runner::{build_client, send_query, ResponseBody, SearchResponse};
pub use search::{filter_summary, ApiErrorBody, NlSearchResponse, OrderFilter, SummaryItem};

/// Resolve the endpoint, send the configured query once and write the report to `out`.
pub fn run_nl_search<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<SearchResponse> {
    let endpoint = config.endpoint()?;
    let client = build_client(config)?;

    let response = send_query(&client, &endpoint, &config.query)?;

    print_report(&response, config.pretty, out)?;
    if config.summary {
        print_summary(&response, out)?;
    }
    Ok(response)
}
