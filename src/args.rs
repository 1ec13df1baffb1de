use clap::{Parser, ValueEnum};
use slovar_scrape::{DescriptionStrategy, TitleStrategy};

#[derive(Parser, Debug)]
#[command(name = "slovar-scrape")]
#[command(about = "Scrapes an online dictionary into a CSV file")]
#[command(version)]
pub struct Args {
    /// Listing page URL (defaults to the astrokot dictionary index)
    #[arg(long)]
    pub listing_url: Option<String>,

    /// JSON configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Links processed between CSV flushes
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Pacing delay between pages, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Title extraction strategy
    #[arg(long, value_enum)]
    pub title: Option<TitleArg>,

    /// Description extraction strategy
    #[arg(long, value_enum)]
    pub description: Option<DescriptionArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TitleArg {
    HeadingThenCell,
    AnyHeadingThenDocTitle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DescriptionArg {
    UntilReferences,
    FullBody,
}

/// Convert from the CLI title value to the library strategy
pub fn convert_title(arg: TitleArg) -> TitleStrategy {
    match arg {
        TitleArg::HeadingThenCell => TitleStrategy::HeadingThenCell,
        TitleArg::AnyHeadingThenDocTitle => TitleStrategy::AnyHeadingThenDocTitle,
    }
}

/// Convert from the CLI description value to the library strategy
pub fn convert_description(arg: DescriptionArg) -> DescriptionStrategy {
    match arg {
        DescriptionArg::UntilReferences => DescriptionStrategy::UntilReferences,
        DescriptionArg::FullBody => DescriptionStrategy::FullBody,
    }
}
