//! Core configuration types for the creature registry service
//!
//! This module contains the main `ServiceConfig` struct that defines where
//! the dataset comes from, where the API listens, and the limits applied to
//! queries and probes.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_BIND_ADDR, DEFAULT_DATA_URL, DEFAULT_PAGE_SIZE, FETCH_TIMEOUT_SECS, MAX_BODY_BYTES,
    MAX_PAGE_SIZE, PROBE_TIMEOUT_SECS, USER_AGENT,
};

/// Main configuration struct for the registry service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bulk dataset location, fetched once at startup.
    ///
    /// `http(s)://` URLs are fetched with GET; `file://` URLs are read from
    /// disk for offline runs.
    pub(crate) data_url: String,

    /// Socket address the HTTP adapter binds to
    pub(crate) bind_addr: String,

    /// Timeout in seconds for each URL reachability probe
    ///
    /// Default: 5 seconds
    pub(crate) probe_timeout_secs: u64,

    /// Timeout in seconds for the startup dataset fetch
    ///
    /// Default: 30 seconds
    pub(crate) fetch_timeout_secs: u64,

    /// Page size when the caller omits `size`
    pub(crate) default_page_size: usize,

    /// Largest accepted `size` for paginated listing
    ///
    /// Default: 30
    pub(crate) max_page_size: usize,

    /// Largest accepted request body in bytes
    pub(crate) max_body_bytes: usize,

    /// User agent for outbound requests
    pub(crate) user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            probe_timeout_secs: PROBE_TIMEOUT_SECS,
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_body_bytes: MAX_BODY_BYTES,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
