//! Distribution statistics for the bazaar price analyzer.
//!
//! This crate handles:
//! - Interpolated percentile estimation
//! - Tukey IQR outlier filtering
//! - Summary statistics (min, max, truncated mean and median)

pub mod outlier;
pub mod percentile;
pub mod summary;

pub use outlier::OutlierFilter;
pub use percentile::percentile;
pub use summary::summarize;
