// Re-export modules
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod results;
pub mod runner;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use error::ScrapeError;
pub use extract::strategy::{DescriptionStrategy, TitleStrategy};
pub use results::{EntryRecord, LinkRecord, RunSummary};

/// Builder for a dictionary scrape run
pub struct Scrape {
    config: ScrapeConfig,
}

impl Scrape {
    /// Create a scrape of the given listing page with default settings
    pub fn new(listing_url: &str) -> Self {
        Self {
            config: ScrapeConfig::new(listing_url),
        }
    }

    /// Use an existing configuration
    pub fn with_config(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, ScrapeError> {
        Ok(Self {
            config: ScrapeConfig::from_file(path)?,
        })
    }

    /// Set the output CSV path
    pub fn with_output_path(mut self, path: &str) -> Self {
        self.config.output_path = path.to_string();
        self
    }

    /// Set the number of processed links between flushes
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Set the pacing delay between pages, in milliseconds
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    /// Set the title extraction strategy
    pub fn with_title_strategy(mut self, strategy: TitleStrategy) -> Self {
        self.config.title_strategy = strategy;
        self
    }

    /// Set the description extraction strategy
    pub fn with_description_strategy(mut self, strategy: DescriptionStrategy) -> Self {
        self.config.description_strategy = strategy;
        self
    }

    /// Run the pipeline to completion and return the run counters
    pub async fn run(self) -> Result<RunSummary, ScrapeError> {
        runner::run(&self.config).await
    }
}
