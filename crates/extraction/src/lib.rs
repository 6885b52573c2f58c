//! Price extraction from listing pages for the bazaar price analyzer.
//!
//! This crate handles:
//! - Digit script normalization (Persian-Arabic / Arabic-Indic to ASCII)
//! - Text-fragment selection from HTML documents
//! - Price candidate parsing and range validation

pub mod digits;
pub mod extractor;
pub mod fragments;

pub use digits::normalize_digits;
pub use extractor::{ExtractionStats, FragmentOutcome, PriceExtractor};
pub use fragments::fragments_containing;
