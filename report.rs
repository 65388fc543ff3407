// Console report for a single nl-search round trip
use std::io::{self, Write};

use serde_json::Value;

use crate::runner::{ResponseBody, SearchResponse};
use crate::search::{filter_summary, ApiErrorBody, NlSearchResponse};

pub fn print_report<W: Write>(
    response: &SearchResponse,
    pretty: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Status code: {}", response.status)?;
    match &response.body {
        ResponseBody::Json(value) if pretty => writeln!(out, "Response JSON: {:#}", value),
        ResponseBody::Json(value) => writeln!(out, "Response JSON: {}", value),
        ResponseBody::Text(raw) => writeln!(out, "Response text: {}", raw),
    }
}

fn looks_like_search_response(value: &Value) -> bool {
    value.get("results").is_some() || value.get("filters").is_some()
}

/// Human-readable digest of a search reply. Prints nothing for bodies of unknown shape.
pub fn print_summary<W: Write>(response: &SearchResponse, out: &mut W) -> io::Result<()> {
    let Some(value) = response.body.as_json() else {
        return Ok(());
    };

    if !response.is_success() {
        if let Ok(err) = serde_json::from_value::<ApiErrorBody>(value.clone()) {
            writeln!(out, "Error: {}", err.message)?;
        }
        return Ok(());
    }

    if !looks_like_search_response(value) {
        return Ok(());
    }
    let parsed = match serde_json::from_value::<NlSearchResponse>(value.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "response body is not an nl-search result");
            return Ok(());
        }
    };

    writeln!(out, "Results: {}", parsed.results.len())?;
    if let Some(filter) = &parsed.filters {
        let items = filter_summary(filter);
        if !items.is_empty() {
            writeln!(out, "Filters:")?;
            for item in items {
                writeln!(out, "  {}: {}", item.label, item.value)?;
            }
        }
    }
    for warning in &parsed.warnings {
        writeln!(out, "Warning: {}", warning)?;
    }
    if let Some(follow_up) = parsed.follow_up.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "Follow-up: {}", follow_up)?;
    }
    Ok(())
}
