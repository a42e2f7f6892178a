// src/store/client.rs

//! HTTP client for fetching a remote dataset
//!
//! The dataset is fetched exactly once per load. There is no retry: a failed
//! fetch is reported to the caller, which decides how loudly to fail.

use crate::error::{Error, Result};
use crate::recipe::{parse_dataset, Dataset};
use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

/// Thin wrapper around a blocking reqwest client
pub struct RecipeClient {
    client: Client,
}

impl RecipeClient {
    /// Create a new client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("platter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch and decode the dataset at `url`
    pub fn fetch_dataset(&self, url: &Url) -> Result<Dataset> {
        info!("Fetching recipe dataset from {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| Error::DownloadError(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .map_err(|e| Error::DownloadError(format!("Failed to read response: {}", e)))?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        parse_dataset(&body)
    }
}
