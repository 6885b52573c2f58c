//! HTTP page fetcher.
//!
//! One GET per analysis, bounded by the configured timeout. Failures
//! are classified into the timeout / status / connection taxonomy and
//! surfaced to the caller; retry policy, if any, belongs there.

use std::time::Duration;

use bazaar_core::config::FetchConfig;
use bazaar_core::{Error, Result};
use tracing::{debug, info};

/// Fetches search-result pages as full text bodies.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a new page fetcher.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch the full body of `url`.
    ///
    /// Non-success statuses become [`Error::HttpStatus`]; transport
    /// failures become [`Error::Timeout`] or [`Error::Connection`].
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        info!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

fn classify_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::timeout(error.to_string())
    } else if let Some(status) = error.status() {
        Error::HttpStatus(status.as_u16())
    } else {
        Error::connection(error.to_string())
    }
}
