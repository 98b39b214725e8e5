//! Type-safe builder for `ServiceConfig` using the typestate pattern
//!
//! `build()` only exists once a data source has been chosen, so a service
//! can never start without knowing where its records come from.

use anyhow::{Context, Result, anyhow};
use std::marker::PhantomData;
use std::net::SocketAddr;

use super::types::ServiceConfig;
use crate::utils::{
    DEFAULT_BIND_ADDR, DEFAULT_DATA_URL, DEFAULT_PAGE_SIZE, FETCH_TIMEOUT_SECS, MAX_BODY_BYTES,
    MAX_PAGE_SIZE, PROBE_TIMEOUT_SECS, USER_AGENT, file_url_path, is_valid_url,
};

// Type states for the builder
pub struct WithDataUrl;

pub struct ServiceConfigBuilder<State = ()> {
    pub(crate) data_url: Option<String>,
    pub(crate) bind_addr: String,
    pub(crate) probe_timeout_secs: u64,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) default_page_size: usize,
    pub(crate) max_page_size: usize,
    pub(crate) max_body_bytes: usize,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ServiceConfigBuilder<()> {
    fn default() -> Self {
        Self {
            data_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            probe_timeout_secs: PROBE_TIMEOUT_SECS,
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_body_bytes: MAX_BODY_BYTES,
            user_agent: USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl ServiceConfig {
    /// Create a builder for configuring a `ServiceConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ServiceConfigBuilder<()> {
        ServiceConfigBuilder::default()
    }

    /// Build a configuration from `CREATURES_*` environment variables
    ///
    /// Unset variables fall back to the defaults in [`crate::utils::constants`].
    pub fn from_env() -> Result<Self> {
        let data_url =
            std::env::var("CREATURES_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());
        let mut builder = Self::builder().data_url(data_url);

        if let Ok(addr) = std::env::var("CREATURES_BIND_ADDR") {
            builder = builder.bind_addr(addr);
        }
        if let Some(secs) = env_number::<u64>("CREATURES_PROBE_TIMEOUT_SECS")? {
            builder = builder.probe_timeout_secs(secs);
        }
        if let Some(secs) = env_number::<u64>("CREATURES_FETCH_TIMEOUT_SECS")? {
            builder = builder.fetch_timeout_secs(secs);
        }
        if let Some(size) = env_number::<usize>("CREATURES_MAX_PAGE_SIZE")? {
            builder = builder.max_page_size(size);
        }

        builder.build()
    }
}

fn env_number<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

impl ServiceConfigBuilder<()> {
    pub fn data_url(self, url: impl Into<String>) -> ServiceConfigBuilder<WithDataUrl> {
        ServiceConfigBuilder {
            data_url: Some(url.into()),
            bind_addr: self.bind_addr,
            probe_timeout_secs: self.probe_timeout_secs,
            fetch_timeout_secs: self.fetch_timeout_secs,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            max_body_bytes: self.max_body_bytes,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the data source is set
impl ServiceConfigBuilder<WithDataUrl> {
    pub fn build(self) -> Result<ServiceConfig> {
        let data_url = self
            .data_url
            .ok_or_else(|| anyhow!("data_url is required"))?;
        if !is_valid_url(&data_url) && file_url_path(&data_url).is_none() {
            return Err(anyhow!(
                "data_url must be an http(s) or file:// URL, got '{data_url}'"
            ));
        }

        self.bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind_addr '{}'", self.bind_addr))?;

        if self.probe_timeout_secs == 0 {
            return Err(anyhow!("probe_timeout_secs must be greater than 0"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(anyhow!("fetch_timeout_secs must be greater than 0"));
        }
        if self.max_page_size == 0 {
            return Err(anyhow!("max_page_size must be greater than 0"));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(anyhow!(
                "default_page_size must be between 1 and max_page_size ({}), got {}",
                self.max_page_size,
                self.default_page_size
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }

        Ok(ServiceConfig {
            data_url,
            bind_addr: self.bind_addr,
            probe_timeout_secs: self.probe_timeout_secs,
            fetch_timeout_secs: self.fetch_timeout_secs,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            max_body_bytes: self.max_body_bytes,
            user_agent: self.user_agent,
        })
    }
}
