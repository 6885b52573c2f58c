//! Price candidate extraction from text fragments.
//!
//! A fragment qualifies as a candidate when it contains the configured
//! currency keyword. The longest digit run in the fragment is assumed
//! to be the price; incidental numbers (model years, mileage) are
//! shorter. Malformed fragments are skipped, never errors.

use bazaar_core::config::ExtractorConfig;
use bazaar_core::Price;
use regex::Regex;
use tracing::debug;

use crate::digits::normalize_digits;
use crate::fragments::fragments_containing;

/// Arabic thousands separator (U+066C) as it appears in listing prices.
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

/// Outcome of scanning a single text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// Fragment yielded a plausible price.
    Accepted(Price),
    /// Fragment contains the negotiable keyword; it carries no price.
    Negotiable,
    /// No usable digit run found.
    NoDigits,
    /// Longest digit run parsed outside the plausible price range.
    OutOfRange(Price),
}

/// Statistics about fragment scanning quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Total fragments scanned.
    pub fragments_seen: u64,
    /// Fragments skipped because they were marked negotiable.
    pub negotiable_skipped: u64,
    /// Fragments skipped for lacking a usable digit run.
    pub no_digits_skipped: u64,
    /// Fragments skipped for an implausibly small or large value.
    pub out_of_range_skipped: u64,
    /// Fragments that yielded a price.
    pub accepted: u64,
}

impl ExtractionStats {
    fn record(&mut self, outcome: FragmentOutcome) {
        self.fragments_seen += 1;
        match outcome {
            FragmentOutcome::Accepted(_) => self.accepted += 1,
            FragmentOutcome::Negotiable => self.negotiable_skipped += 1,
            FragmentOutcome::NoDigits => self.no_digits_skipped += 1,
            FragmentOutcome::OutOfRange(_) => self.out_of_range_skipped += 1,
        }
    }
}

/// Scans currency-tagged text fragments for listing prices.
pub struct PriceExtractor {
    config: ExtractorConfig,
    /// One leading digit followed by digits or commas (maximal run).
    run_pattern: Regex,
}

impl PriceExtractor {
    /// Create a new price extractor.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            run_pattern: Regex::new(r"\d[\d,]*").expect("digit-run pattern is valid"),
        }
    }

    /// Extract validated prices from a full HTML document, in document
    /// order.
    pub fn extract(&self, html: &str) -> Vec<Price> {
        self.extract_report(html).0
    }

    /// Extract validated prices from a full HTML document along with
    /// scanning statistics.
    pub fn extract_report(&self, html: &str) -> (Vec<Price>, ExtractionStats) {
        let fragments = fragments_containing(html, &self.config.currency_keyword);
        self.extract_fragments(fragments.iter().map(String::as_str))
    }

    /// Extract validated prices from pre-selected fragments, preserving
    /// fragment order.
    pub fn extract_fragments<'a, I>(&self, fragments: I) -> (Vec<Price>, ExtractionStats)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut prices = Vec::new();
        let mut stats = ExtractionStats::default();

        for fragment in fragments {
            let outcome = self.scan_fragment(fragment);
            stats.record(outcome);
            match outcome {
                FragmentOutcome::Accepted(price) => prices.push(price),
                FragmentOutcome::Negotiable => {
                    debug!(fragment, "skipping negotiable fragment");
                }
                FragmentOutcome::NoDigits => {
                    debug!(fragment, "skipping fragment without a digit run");
                }
                FragmentOutcome::OutOfRange(value) => {
                    debug!(fragment, value, "skipping out-of-range value");
                }
            }
        }

        (prices, stats)
    }

    /// Scan a single fragment for a price candidate.
    pub fn scan_fragment(&self, fragment: &str) -> FragmentOutcome {
        let normalized = normalize_digits(fragment);
        let trimmed = normalized.trim();

        if trimmed.contains(&self.config.negotiable_keyword) {
            return FragmentOutcome::Negotiable;
        }

        let canonical = trimmed.replace(ARABIC_THOUSANDS_SEPARATOR, ",");

        // Longest run wins; ties go to the first occurrence, so only a
        // strictly longer run may displace the current best.
        let mut best: Option<&str> = None;
        for m in self.run_pattern.find_iter(&canonical) {
            let run = m.as_str();
            if best.map_or(true, |b| run.len() > b.len()) {
                best = Some(run);
            }
        }

        let Some(run) = best else {
            return FragmentOutcome::NoDigits;
        };

        let digits: String = run.chars().filter(|&c| c != ',').collect();
        let Ok(value) = digits.parse::<Price>() else {
            // Unreachable for runs the pattern can produce, but a run of
            // commas-and-digits longer than i64 overflows.
            return FragmentOutcome::NoDigits;
        };

        if value >= self.config.min_price && value <= self.config.max_price {
            FragmentOutcome::Accepted(value)
        } else {
            FragmentOutcome::OutOfRange(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_extractor() -> PriceExtractor {
        PriceExtractor::new(ExtractorConfig::default())
    }

    #[test]
    fn test_simple_price() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("قیمت: 25,000,000 تومان"),
            FragmentOutcome::Accepted(25_000_000)
        );
    }

    #[test]
    fn test_persian_digits_normalized() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("قیمت: ۲۵٬۰۰۰٬۰۰۰ تومان"),
            FragmentOutcome::Accepted(25_000_000)
        );
    }

    #[test]
    fn test_negotiable_skipped_even_with_digits() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("توافقی 25,000,000 تومان"),
            FragmentOutcome::Negotiable
        );
    }

    #[test]
    fn test_short_run_out_of_range() {
        let extractor = make_extractor();
        // Model year is the longest run but far below the minimum price.
        assert_eq!(
            extractor.scan_fragment("تومان 1400 مدل"),
            FragmentOutcome::OutOfRange(1400)
        );
    }

    #[test]
    fn test_no_digits() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("قیمت تومان"),
            FragmentOutcome::NoDigits
        );
    }

    #[test]
    fn test_longest_run_wins() {
        let extractor = make_extractor();
        // "1400" loses to the longer price run regardless of position.
        assert_eq!(
            extractor.scan_fragment("مدل 1400 - 850,000,000 تومان"),
            FragmentOutcome::Accepted(850_000_000)
        );
    }

    #[test]
    fn test_equal_length_runs_first_wins() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("1,000,000 یا 2,000,000 تومان"),
            FragmentOutcome::Accepted(1_000_000)
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let extractor = make_extractor();
        assert_eq!(
            extractor.scan_fragment("1,000,000 تومان"),
            FragmentOutcome::Accepted(1_000_000)
        );
        assert_eq!(
            extractor.scan_fragment("50,000,000,000 تومان"),
            FragmentOutcome::Accepted(50_000_000_000)
        );
        assert_eq!(
            extractor.scan_fragment("999,999 تومان"),
            FragmentOutcome::OutOfRange(999_999)
        );
        assert_eq!(
            extractor.scan_fragment("50,000,000,001 تومان"),
            FragmentOutcome::OutOfRange(50_000_000_001)
        );
    }

    #[test]
    fn test_overflowing_run_skipped() {
        let extractor = make_extractor();
        let fragment = format!("{} تومان", "9".repeat(40));
        assert_eq!(
            extractor.scan_fragment(&fragment),
            FragmentOutcome::NoDigits
        );
    }

    #[test]
    fn test_fragment_batch_matches_spec_case() {
        let extractor = make_extractor();
        let fragments = [
            "قیمت: 25,000,000 تومان",
            "توافقی",
            "تومان 1400 مدل",
            "850000000 تومان",
        ];
        let (prices, stats) = extractor.extract_fragments(fragments);

        assert_eq!(prices, vec![25_000_000, 850_000_000]);
        assert_eq!(stats.fragments_seen, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.negotiable_skipped, 1);
        assert_eq!(stats.out_of_range_skipped, 1);
        assert_eq!(stats.no_digits_skipped, 0);
    }

    #[test]
    fn test_all_outputs_in_range() {
        let extractor = make_extractor();
        let fragments = [
            "12 تومان",
            "۹۹۹,۹۹۹ تومان",
            "1,500,000 تومان",
            "تومان 60,000,000,000",
            "850,000,000 تومان",
            "no digits تومان",
        ];
        let (prices, _) = extractor.extract_fragments(fragments);
        assert!(prices
            .iter()
            .all(|&p| (1_000_000..=50_000_000_000).contains(&p)));
        assert_eq!(prices, vec![1_500_000, 850_000_000]);
    }

    #[test]
    fn test_extract_from_document() {
        let extractor = make_extractor();
        let html = "<html><body>\
            <div class=\"card\">پژو 206 <span>۲۵۰٬۰۰۰٬۰۰۰ تومان</span></div>\
            <div class=\"card\"><span>توافقی</span></div>\
            <div class=\"card\"><span>310,000,000 تومان</span></div>\
            <div class=\"other\">مدل 1394</div>\
            </body></html>";

        let (prices, stats) = extractor.extract_report(html);
        assert_eq!(prices, vec![250_000_000, 310_000_000]);
        // The negotiable card has no currency keyword, so it is never
        // selected as a fragment.
        assert_eq!(stats.fragments_seen, 2);
    }

    #[test]
    fn test_custom_keywords() {
        let config = ExtractorConfig {
            currency_keyword: "AED".to_string(),
            negotiable_keyword: "negotiable".to_string(),
            min_price: 1_000,
            max_price: 1_000_000,
        };
        let extractor = PriceExtractor::new(config);
        assert_eq!(
            extractor.scan_fragment("45,000 AED"),
            FragmentOutcome::Accepted(45_000)
        );
        assert_eq!(
            extractor.scan_fragment("negotiable 45,000 AED"),
            FragmentOutcome::Negotiable
        );
    }
}
