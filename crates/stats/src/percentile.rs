//! Interpolated percentile estimation.

use bazaar_core::Price;

/// Estimate the `p`-th percentile (`0.0..=1.0`) of `sorted` by linear
/// interpolation between adjacent order statistics.
///
/// For `n` values 0-indexed: `idx = (n-1)*p`, `lo = floor(idx)`,
/// `hi = min(lo+1, n-1)`, result `sorted[lo]*(1-frac) + sorted[hi]*frac`.
///
/// `sorted` must already be in ascending order. Returns `None` on an
/// empty slice.
pub fn percentile(sorted: &[Price], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let n = sorted.len();
    let idx = (n - 1) as f64 * p;
    let lo = idx.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = idx - lo as f64;

    Some(sorted[lo] as f64 * (1.0 - frac) + sorted[hi] as f64 * frac)
}
