use thiserror::Error;

/// Errors produced by the scrape pipeline
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Non-2xx HTTP status for a fetched page
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A URL could not be parsed or resolved
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The output file could not be opened or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
