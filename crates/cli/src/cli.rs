//! Command-line interface definition.

use clap::Parser;

/// Market price analysis for car listings.
#[derive(Debug, Parser)]
#[command(name = "bazaar", version, about)]
pub struct Cli {
    /// Car name to search for (e.g. "206 تیپ 2").
    pub name: String,

    /// Model year, Solar Hijri, 2 or 4 digits (e.g. 1394 or 94).
    #[arg(long, default_value = "")]
    pub year: String,

    /// City, by Persian name or site slug.
    #[arg(long, default_value = "tehran")]
    pub city: String,

    /// Keep statistical outliers instead of filtering them out.
    #[arg(long)]
    pub keep_outliers: bool,

    /// Emit the full report as JSON.
    #[arg(long)]
    pub json: bool,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}
