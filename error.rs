// Errors raised while resolving, sending or reporting a query
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NlSearchError {
    #[error("Query cannot be empty. Please enter a search query.")]
    EmptyQuery,

    #[error("Invalid endpoint URL {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Could not reach nl-search endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NlSearchError>;
