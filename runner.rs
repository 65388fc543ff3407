// Blocking reqwest client, one request per run
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::config::RunnerConfig;
use crate::error::{NlSearchError, Result};

/// Body of an nl-search reply: decoded JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Never fails. A body that isn't JSON is kept verbatim.
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn build_client(config: &RunnerConfig) -> Result<Client> {
    // blocking client defaults to a 30s timeout; None disables it
    let client = Client::builder().timeout(config.timeout()).build()?;
    Ok(client)
}

pub fn send_query(client: &Client, endpoint: &Url, query: &str) -> Result<SearchResponse> {
    let query = query.trim();
    if query.is_empty() {
        return Err(NlSearchError::EmptyQuery);
    }

    tracing::info!(endpoint = %endpoint, "sending nl-search query");
    let payload = serde_json::json!({ "query": query });

    let resp = client
        .post(endpoint.clone())
        .json(&payload)
        .send()
        .map_err(|e| {
            tracing::warn!(error = %e, "nl-search request failed");
            NlSearchError::Transport(e)
        })?;

    let status = resp.status().as_u16();
    let body = ResponseBody::decode(resp.text()?);
    tracing::debug!(
        status,
        json = matches!(body, ResponseBody::Json(_)),
        "nl-search response received"
    );

    Ok(SearchResponse { status, body })
}
