use serde::{Deserialize, Serialize};

/// How the entry title is located on a detail page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStrategy {
    /// Text of the first h1, falling back to the first table cell
    #[default]
    HeadingThenCell,

    /// Text of the first h1/h2/h3, falling back to the document `<title>`
    AnyHeadingThenDocTitle,
}

/// How the description region is chosen on a detail page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionStrategy {
    /// Capture paragraph and cell text between the title and the
    /// "Литература" heading
    #[default]
    UntilReferences,

    /// Whole-page text with scripts, styles and navigation chrome removed
    FullBody,
}
