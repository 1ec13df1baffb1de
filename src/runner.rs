use std::time::Duration;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extract;
use crate::fetch::PageFetcher;
use crate::links;
use crate::results::{EntryRecord, RunSummary};
use crate::writer::CsvBatchWriter;

/// Run the full pipeline: collect links, extract each entry sequentially
/// with a pacing delay, and flush results to the CSV file in batches.
///
/// A failed detail page is skipped and the loop continues; a failed listing
/// page ends the run with an empty summary; a writer failure aborts.
pub async fn run(config: &ScrapeConfig) -> Result<RunSummary, ScrapeError> {
    let fetcher = PageFetcher::new(config)?;

    ::log::info!("Collecting entry links from {}", config.listing_url);
    let links = links::collect_links(&fetcher, config).await;

    let mut summary = RunSummary {
        links_found: links.len(),
        ..RunSummary::default()
    };

    if links.is_empty() {
        ::log::warn!("No entry links found; check the listing page structure");
        return Ok(summary);
    }

    let mut writer = CsvBatchWriter::new(&config.output_path);
    let mut buffer: Vec<EntryRecord> = Vec::new();
    let delay = Duration::from_millis(config.delay_ms);
    let total = links.len();

    for (index, link) in links.iter().enumerate() {
        let processed = index + 1;
        ::log::info!("Processing page {}/{}: {}", processed, total, link.url);

        match extract::extract_entry(
            &fetcher,
            link,
            config.title_strategy,
            config.description_strategy,
        )
        .await
        {
            Some(entry) => {
                summary.extracted += 1;
                buffer.push(entry);
            }
            None => summary.skipped += 1,
        }

        if is_flush_point(processed, total, config.batch_size) {
            ::log::info!(
                "Writing batch of {} records to {}",
                buffer.len(),
                config.output_path
            );
            summary.rows_written += writer.write_batch(&buffer)?;
            buffer.clear();
        }

        // Fixed pacing delay after every page, success or failure
        tokio::time::sleep(delay).await;
    }

    finish(&summary, &config.output_path);
    Ok(summary)
}

/// True when the buffered records should be flushed: after every
/// `batch_size` processed links, and at the final link
pub fn is_flush_point(processed: usize, total: usize, batch_size: usize) -> bool {
    if processed == total {
        return true;
    }
    batch_size > 0 && processed % batch_size == 0
}

/// End-of-run consistency reporting.
///
/// Skipped pages are tracked explicitly; the line count of the output file
/// is only an approximate cross-check and excludes the header row.
fn finish(summary: &RunSummary, output_path: &str) {
    if summary.skipped > 0 {
        ::log::warn!(
            "Skipped {} of {} pages due to fetch errors",
            summary.skipped,
            summary.links_found
        );
    }
    if summary.rows_written != summary.extracted {
        ::log::warn!(
            "Wrote {} rows but extracted {} records",
            summary.rows_written,
            summary.extracted
        );
    }

    match std::fs::read_to_string(output_path) {
        Ok(contents) => {
            let data_lines = contents.lines().count().saturating_sub(1);
            if data_lines != summary.rows_written {
                ::log::warn!(
                    "Output file has {} data lines, expected {}",
                    data_lines,
                    summary.rows_written
                );
            }
        }
        Err(e) => ::log::warn!("Could not re-read {} for the final check: {}", output_path, e),
    }

    ::log::info!(
        "Done: {} links, {} extracted, {} skipped, {} rows written",
        summary.links_found,
        summary.extracted,
        summary.skipped,
        summary.rows_written
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flush_points(total: usize, batch_size: usize) -> Vec<usize> {
        (1..=total)
            .filter(|processed| is_flush_point(*processed, total, batch_size))
            .collect()
    }

    #[test]
    fn test_23_links_flush_after_10_20_and_23() {
        assert_eq!(flush_points(23, 10), vec![10, 20, 23]);
    }

    #[test]
    fn test_exact_multiple_flushes_once_at_the_end() {
        assert_eq!(flush_points(20, 10), vec![10, 20]);
    }

    #[test]
    fn test_short_run_flushes_only_at_the_last_link() {
        assert_eq!(flush_points(5, 10), vec![5]);
    }

    #[test]
    fn test_single_link_run() {
        assert_eq!(flush_points(1, 10), vec![1]);
    }

    #[test]
    fn test_zero_batch_size_still_flushes_remainder() {
        assert_eq!(flush_points(5, 0), vec![5]);
    }
}
