//! URL validation utilities.
//!
//! Records carry two externally supplied links; these helpers decide whether
//! a string is well-formed enough to be worth probing at all.

use std::path::PathBuf;
use url::Url;

/// Check if a URL is a well-formed absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Resolve a `file://` URL to a local path
///
/// Returns `None` for any other scheme or for URLs that do not map to a
/// filesystem path on this platform.
#[must_use]
pub fn file_url_path(url: &str) -> Option<PathBuf> {
    let parsed = Url::parse(url).ok()?;
    if parsed.scheme() != "file" {
        return None;
    }
    parsed.to_file_path().ok()
}
