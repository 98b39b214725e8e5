//! One-shot retrieval of the bulk dataset
//!
//! `http(s)` sources are fetched with a single GET; any non-success status
//! or transport error is an [`RegistryError::UpstreamFetch`]. `file://`
//! sources are read from disk.

use reqwest::Client;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::utils::file_url_path;

/// Fetches the raw dataset bytes
#[derive(Debug, Clone)]
pub struct DatasetFetcher {
    client: Client,
    timeout: Duration,
}

impl DatasetFetcher {
    pub fn new(config: &ServiceConfig) -> RegistryResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| {
                RegistryError::UpstreamFetch(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            timeout: config.fetch_timeout(),
        })
    }

    pub async fn fetch(&self, url: &str) -> RegistryResult<Vec<u8>> {
        if let Some(path) = file_url_path(url) {
            return tokio::fs::read(&path).await.map_err(|e| {
                RegistryError::UpstreamFetch(format!("failed to read {}: {e}", path.display()))
            });
        }

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| RegistryError::UpstreamFetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::UpstreamFetch(format!(
                "{url} responded with status {status}"
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            RegistryError::UpstreamFetch(format!("failed to read body from {url}: {e}"))
        })?;
        Ok(body.to_vec())
    }
}
