//! Shared configuration constants for the creature registry
//!
//! This module contains default values and limits used throughout the
//! codebase to ensure consistency and avoid magic numbers.

/// Remote bulk dataset loaded once at startup
///
/// A JSON array of creature-shaped objects. The payload names the resource
/// link `pokemon_url`, which is accepted as an alias for `resource_url`.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/DetainedDeveloper/Pokedex/master/pokedex_raw/pokedex_raw_array.json";

/// Default listen address for the HTTP adapter
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Reachability probe timeout: 5 seconds
///
/// Caps the worst-case latency a create or replace can add to a request.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Timeout for the one-shot startup fetch of the bulk dataset
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Page size used when the caller does not pass `size`
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound on `size` for paginated listing
///
/// Prevents unbounded result sets on the paginated endpoint.
pub const MAX_PAGE_SIZE: usize = 30;

/// Maximum accepted request body: 1 MiB
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// User agent sent with the dataset fetch and reachability probes
pub const USER_AGENT: &str = concat!("kodegen-creatures/", env!("CARGO_PKG_VERSION"));
