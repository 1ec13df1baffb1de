use scraper::{Html, Selector};
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetch::PageFetcher;
use crate::results::LinkRecord;

/// Collect detail-page links from the listing page.
///
/// Never fails: a listing fetch error is logged and yields an empty set,
/// which ends the run without output.
pub async fn collect_links(fetcher: &PageFetcher, config: &ScrapeConfig) -> Vec<LinkRecord> {
    let html = match fetcher.fetch(&config.listing_url).await {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to fetch listing page {}: {}", config.listing_url, e);
            return Vec::new();
        }
    };

    let base = match Url::parse(&config.listing_url) {
        Ok(base) => base,
        Err(e) => {
            ::log::error!("Invalid listing URL {}: {}", config.listing_url, e);
            return Vec::new();
        }
    };

    let links = links_from_html(&html, &base, &config.skip_pages);
    ::log::info!("Found {} entry links on {}", links.len(), config.listing_url);
    links
}

/// Extract candidate entry links from listing HTML.
///
/// Selects anchors whose href ends in the page-file extension, skips empty
/// hrefs and texts as well as known non-entry pages, and resolves relative
/// hrefs against the listing URL. No deduplication is performed.
pub fn links_from_html(html: &str, base: &Url, skip_pages: &[String]) -> Vec<LinkRecord> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(r#"a[href$=".htm"]"#).unwrap();

    let mut links = Vec::new();
    for anchor in doc.select(&selector) {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        let text = anchor.text().collect::<String>().trim().to_string();

        if href.is_empty() || text.is_empty() {
            continue;
        }
        if skip_pages.iter().any(|page| href.contains(page.as_str())) {
            ::log::debug!("Skipping non-entry page: {}", href);
            continue;
        }

        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                ::log::warn!("Skipping unresolvable href {}: {}", href, e);
                continue;
            }
        };

        links.push(LinkRecord::new(resolved.to_string(), text));
    }

    links
}
