use serde::{Deserialize, Serialize};

/// A detail-page link discovered on the listing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Absolute URL of the detail page
    pub url: String,

    /// Visible text of the anchor on the listing page
    pub link_text: String,
}

impl LinkRecord {
    /// Create a new link record
    pub fn new(url: String, link_text: String) -> Self {
        Self { url, link_text }
    }
}

/// One extracted dictionary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    /// URL of the detail page
    pub url: String,

    /// Anchor text the entry was discovered under
    pub link_text: String,

    /// Extracted title
    pub title: String,

    /// Extracted description text
    pub description: String,
}

/// Counters for a completed run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Links discovered on the listing page
    pub links_found: usize,

    /// Pages that produced an entry record
    pub extracted: usize,

    /// Pages skipped because their fetch failed
    pub skipped: usize,

    /// Data rows appended to the output file
    pub rows_written: usize,
}
