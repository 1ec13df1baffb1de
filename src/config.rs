use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ScrapeError;
use crate::extract::strategy::{DescriptionStrategy, TitleStrategy};

/// Configuration for a dictionary scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Listing page enumerating all dictionary entries
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Path of the output CSV file
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Number of processed links between flushes
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pacing delay after each page, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Page names on the listing that are not dictionary entries
    #[serde(default = "default_skip_pages")]
    pub skip_pages: Vec<String>,

    /// How entry titles are located on a detail page
    #[serde(default)]
    pub title_strategy: TitleStrategy,

    /// How entry descriptions are extracted
    #[serde(default)]
    pub description_strategy: DescriptionStrategy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(&default_listing_url())
    }
}

impl ScrapeConfig {
    /// Create a configuration with default values for the given listing page
    pub fn new(listing_url: &str) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            output_path: default_output_path(),
            batch_size: default_batch_size(),
            delay_ms: default_delay_ms(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            skip_pages: default_skip_pages(),
            title_strategy: TitleStrategy::default(),
            description_strategy: DescriptionStrategy::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default listing page
fn default_listing_url() -> String {
    "https://www.astrokot.kiev.ua/slovar/spisok.htm".to_string()
}

/// Default output file
fn default_output_path() -> String {
    "dictionary.csv".to_string()
}

/// Default links per flush
fn default_batch_size() -> usize {
    10
}

/// Default pacing delay in milliseconds
fn default_delay_ms() -> u64 {
    1000
}

/// Default browser-like User-Agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

/// Default per-request timeout in seconds
fn default_request_timeout_secs() -> u64 {
    30
}

/// Default non-entry page names skipped by the link collector
fn default_skip_pages() -> Vec<String> {
    vec!["titel.htm".to_string(), "spisok.htm".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ScrapeConfig =
            serde_json::from_str(r#"{"listing_url": "https://example.com/list.htm"}"#).unwrap();

        assert_eq!(config.listing_url, "https://example.com/list.htm");
        assert_eq!(config.output_path, "dictionary.csv");
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.delay_ms, 1000);
        assert_eq!(config.skip_pages, vec!["titel.htm", "spisok.htm"]);
        assert_eq!(config.title_strategy, TitleStrategy::HeadingThenCell);
        assert_eq!(
            config.description_strategy,
            DescriptionStrategy::UntilReferences
        );
    }

    #[test]
    fn test_strategy_names_round_trip() {
        let config: ScrapeConfig = serde_json::from_str(
            r#"{
                "listing_url": "https://example.com/list.htm",
                "title_strategy": "any_heading_then_doc_title",
                "description_strategy": "full_body"
            }"#,
        )
        .unwrap();

        assert_eq!(config.title_strategy, TitleStrategy::AnyHeadingThenDocTitle);
        assert_eq!(config.description_strategy, DescriptionStrategy::FullBody);
    }
}
