//! Configuration structures for the bazaar price analyzer.
//!
//! Locale-specific keywords live here rather than as literals in the
//! extraction code, so the pipeline can be pointed at another
//! marketplace or currency without touching the core.

use serde::{Deserialize, Serialize};

/// Main configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Price extraction configuration.
    pub extractor: ExtractorConfig,
    /// Outlier filter configuration.
    pub outlier: OutlierConfig,
    /// Page fetch configuration.
    pub fetch: FetchConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            outlier: OutlierConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Price extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Currency-unit keyword marking a fragment as a price candidate.
    pub currency_keyword: String,
    /// Keyword meaning "negotiable"; such fragments carry no price.
    pub negotiable_keyword: String,
    /// Minimum plausible price, in the smallest reported currency unit.
    pub min_price: i64,
    /// Maximum plausible price.
    pub max_price: i64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            currency_keyword: "تومان".to_string(),
            negotiable_keyword: "توافقی".to_string(),
            min_price: 1_000_000,
            max_price: 50_000_000_000,
        }
    }
}

/// Outlier filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Samples below this count are passed through unfiltered.
    pub min_sample_size: usize,
    /// IQR fence multiplier (1.5 = Tukey's standard fence).
    pub fence_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            min_sample_size: 8,
            fence_multiplier: 1.5,
        }
    }
}

/// Page fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the listing site.
    pub base_url: String,
    /// User-Agent header sent with each request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://divar.ir".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
        }
    }
}
