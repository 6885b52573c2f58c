//! Listing-page fetching and search URL construction.
//!
//! This crate handles:
//! - HTTP retrieval of search-result pages (with timeout, no retries)
//! - Search query and URL building
//! - City name to site slug mapping

pub mod cities;
pub mod client;
pub mod query;

pub use cities::city_slug;
pub use client::PageFetcher;
pub use query::{build_query, build_search_url, normalize_year};
