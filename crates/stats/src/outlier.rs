//! Tukey IQR outlier filtering.
//!
//! Removes values outside `[Q1 - k*IQR, Q3 + k*IQR]`, preserving the
//! original order of the survivors. Quartiles are computed fresh on
//! every invocation.

use bazaar_core::config::OutlierConfig;
use bazaar_core::Price;
use tracing::debug;

use crate::percentile::percentile;

/// IQR fence outlier filter.
pub struct OutlierFilter {
    config: OutlierConfig,
}

impl OutlierFilter {
    /// Create a new outlier filter.
    pub fn new(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Filter with Tukey's standard 1.5 fence and the default minimum
    /// sample size.
    pub fn standard() -> Self {
        Self::new(OutlierConfig::default())
    }

    /// Return the values of `prices` inside the IQR fence, in their
    /// original order.
    ///
    /// Samples smaller than the configured minimum are returned
    /// unchanged; the fence is not statistically meaningful there and
    /// thin evidence should not discard legitimate data.
    pub fn filter(&self, prices: &[Price]) -> Vec<Price> {
        if prices.len() < self.config.min_sample_size {
            return prices.to_vec();
        }

        let mut sorted = prices.to_vec();
        sorted.sort_unstable();

        let (q1, q3) = match (percentile(&sorted, 0.25), percentile(&sorted, 0.75)) {
            (Some(q1), Some(q3)) => (q1, q3),
            _ => return prices.to_vec(),
        };

        let iqr = q3 - q1;
        let low = q1 - self.config.fence_multiplier * iqr;
        let high = q3 + self.config.fence_multiplier * iqr;

        let kept: Vec<Price> = prices
            .iter()
            .copied()
            .filter(|&x| {
                let x = x as f64;
                x >= low && x <= high
            })
            .collect();

        debug!(
            total = prices.len(),
            kept = kept.len(),
            q1,
            q3,
            "applied IQR fence"
        );

        kept
    }
}
