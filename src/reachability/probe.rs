//! HTTP-backed URL reachability probe
//!
//! Sends a `HEAD` request with a bounded timeout. Only an explicit `200 OK`
//! counts as reachable; any other status, a timeout, or a transport failure
//! degrades to `false`. Redirects are not followed.

use futures::future::BoxFuture;
use log::debug;
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;

use super::UrlProbe;
use crate::config::ServiceConfig;
use crate::utils::USER_AGENT;

/// Reachability probe backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpUrlProbe {
    client: Client,
    timeout: Duration,
}

impl HttpUrlProbe {
    /// Create a probe with the given per-request timeout
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Self::with_user_agent(timeout, USER_AGENT)
    }

    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        Self::with_user_agent(config.probe_timeout(), config.user_agent())
    }

    fn with_user_agent(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .connect_timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build probe HTTP client: {e}"))?;
        Ok(Self { client, timeout })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn probe(&self, url: &str) -> bool {
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                debug!("Probe of {url} returned status {}", response.status());
                false
            }
            Err(e) if e.is_timeout() => {
                debug!("Probe of {url} timed out after {:?}", self.timeout);
                false
            }
            Err(e) => {
                debug!("Probe of {url} failed: {e}");
                false
            }
        }
    }
}

impl UrlProbe for HttpUrlProbe {
    fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool> {
        Box::pin(self.probe(url))
    }
}
