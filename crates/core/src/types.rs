//! Core data types for the bazaar price analyzer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listing price in the smallest reported currency unit (Toman).
pub type Price = i64;

/// Summary statistics over a non-empty set of listing prices.
///
/// Mean and median are truncated toward zero, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Lowest price in the set.
    pub min: Price,
    /// Highest price in the set.
    pub max: Price,
    /// Arithmetic mean, integer-truncated.
    pub mean: Price,
    /// Median, integer-truncated for even-sized sets.
    pub median: Price,
}

impl PriceSummary {
    /// Spread between the highest and lowest price.
    #[inline]
    pub fn range(&self) -> Price {
        self.max - self.min
    }
}

/// Full result of one market analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    /// Search query sent to the listing site.
    pub query: String,
    /// Search results URL that was fetched.
    pub url: String,
    /// Number of prices extracted before outlier filtering.
    pub raw_count: usize,
    /// Number of prices remaining after outlier filtering.
    pub filtered_count: usize,
    /// Summary over the filtered prices.
    pub summary: PriceSummary,
    /// When the page was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Format a price compactly: value and unit, in millions or billions
/// of Toman.
///
/// `1_520_000_000` -> `("1.52", "میلیارد تومان")`,
/// `520_000_000` -> `("520", "میلیون تومان")`.
pub fn fmt_compact_toman(price: Price) -> (String, &'static str) {
    if price >= 1_000_000_000 {
        let val = price as f64 / 1_000_000_000.0;
        (format!("{val:.2}"), "میلیارد تومان")
    } else {
        let val = price as f64 / 1_000_000.0;
        (format!("{val:.0}"), "میلیون تومان")
    }
}

/// Format a price with thousands separators and the currency unit.
pub fn fmt_toman(price: Price) -> String {
    format!("{} تومان", group_thousands(price))
}

/// Insert comma separators into an integer's decimal representation.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
