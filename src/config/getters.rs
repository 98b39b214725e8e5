//! Getter methods for `ServiceConfig`

use std::time::Duration;

use super::types::ServiceConfig;

impl ServiceConfig {
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    #[must_use]
    pub fn probe_timeout_secs(&self) -> u64 {
        self.probe_timeout_secs
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    #[must_use]
    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    #[must_use]
    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
