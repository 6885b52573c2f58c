//! Summary statistics over a price set.

use bazaar_core::{Error, Price, PriceSummary, Result};

/// Compute min, max, truncated mean and truncated median over
/// `prices`.
///
/// Fails with [`Error::InsufficientData`] on an empty slice; an empty
/// market must be surfaced to the caller, never coerced into a zero
/// summary.
pub fn summarize(prices: &[Price]) -> Result<PriceSummary> {
    if prices.is_empty() {
        return Err(Error::insufficient_data(
            "cannot summarize an empty price set",
        ));
    }

    let mut min = prices[0];
    let mut max = prices[0];
    let mut sum: i128 = 0;
    for &price in prices {
        min = min.min(price);
        max = max.max(price);
        sum += price as i128;
    }

    // i128 division truncates toward zero, matching the truncation
    // contract for the mean.
    let mean = (sum / prices.len() as i128) as Price;

    Ok(PriceSummary {
        min,
        max,
        mean,
        median: median(prices),
    })
}

/// Median of a non-empty slice: middle element for odd counts,
/// truncated average of the two central elements for even counts.
fn median(prices: &[Price]) -> Price {
    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        ((sorted[mid - 1] as i128 + sorted[mid] as i128) / 2) as Price
    }
}
