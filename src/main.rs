use clap::Parser;
use slovar_scrape::{Scrape, ScrapeConfig};

mod args;
use args::{Args, convert_description, convert_title};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ScrapeConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ScrapeConfig::default(),
    };

    // Apply command-line overrides
    if let Some(listing_url) = args.listing_url {
        config.listing_url = listing_url;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(title) = args.title {
        config.title_strategy = convert_title(title);
    }
    if let Some(description) = args.description {
        config.description_strategy = convert_description(description);
    }

    ::log::info!("Starting scrape of {}", config.listing_url);
    let output_path = config.output_path.clone();
    let start_time = std::time::Instant::now();

    let summary = match Scrape::with_config(config).run().await {
        Ok(summary) => summary,
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    };

    let duration = start_time.elapsed();
    println!(
        "Processed {} links in {:.2} seconds: {} extracted, {} skipped, {} rows written to {}",
        summary.links_found,
        duration.as_secs_f64(),
        summary.extracted,
        summary.skipped,
        summary.rows_written,
        output_path
    );
}
