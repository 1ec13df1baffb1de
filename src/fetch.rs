use std::time::Duration;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

/// Source charset resolved for a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Windows1251,
}

impl Charset {
    fn encoding(self) -> &'static Encoding {
        match self {
            Charset::Utf8 => UTF_8,
            Charset::Windows1251 => WINDOWS_1251,
        }
    }
}

/// HTTP client that fetches pages and normalizes their encoding.
///
/// The dictionary site mixes windows-1251 and UTF-8 inconsistently, and the
/// Content-Type header can disagree with the in-page meta declaration. The
/// meta declaration wins when it names the non-default charset.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the configured User-Agent and request timeout
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page and decode its body to text.
    ///
    /// Fails on network errors and non-2xx statuses; callers decide whether
    /// that aborts the run or just skips the page.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = response.bytes().await?;
        Ok(decode_page(&bytes, content_type.as_deref()))
    }
}

/// Decode raw page bytes, re-decoding from the original bytes when an
/// in-page meta declaration disagrees with the response header
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> String {
    let header_charset = charset_from_content_type(content_type);
    let html = decode_bytes(bytes, header_charset);

    if header_charset != Charset::Windows1251 && meta_declares_cp1251(&html) {
        ::log::debug!("Meta declares windows-1251, re-decoding from original bytes");
        return decode_bytes(bytes, Charset::Windows1251);
    }

    html
}

/// Resolve the charset from a Content-Type header value, defaulting to UTF-8
/// when absent or unrecognized
pub fn charset_from_content_type(content_type: Option<&str>) -> Charset {
    match content_type {
        Some(value) if value.to_ascii_lowercase().contains("charset=windows-1251") => {
            Charset::Windows1251
        }
        _ => Charset::Utf8,
    }
}

/// Check whether a `<meta charset>` or `<meta http-equiv="Content-Type">`
/// declaration names windows-1251.
///
/// Only real charset declarations count: the `content` attribute is a
/// signal solely on the Content-Type meta, so keyword or description metas
/// that merely mention the encoding never trigger a re-decode.
///
/// A windows-1251 body mis-decoded as UTF-8 keeps its ASCII intact, so the
/// meta tag is still readable in the garbled text.
pub fn meta_declares_cp1251(html: &str) -> bool {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("meta").unwrap();

    for meta in doc.select(&selector) {
        let value = meta.value();

        if let Some(charset) = value.attr("charset") {
            if charset.to_ascii_lowercase().contains("windows-1251") {
                return true;
            }
        }

        let is_content_type = value
            .attr("http-equiv")
            .is_some_and(|header| header.eq_ignore_ascii_case("content-type"));
        if is_content_type {
            if let Some(content) = value.attr("content") {
                if content.to_ascii_lowercase().contains("windows-1251") {
                    return true;
                }
            }
        }
    }

    false
}

/// Decode bytes with the given charset, replacing malformed sequences
fn decode_bytes(bytes: &[u8], charset: Charset) -> String {
    let (text, _, _) = charset.encoding().decode(bytes);
    text.into_owned()
}
