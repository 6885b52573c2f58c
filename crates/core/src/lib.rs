//! Core types and configuration for the bazaar price analyzer.
//!
//! This crate provides shared types used across all other crates:
//! - Price and summary types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use types::*;
