//! Error types for registry operations
//!
//! Every failure a client can observe carries a machine-distinguishable
//! [`ErrorKind`] and a human-readable message. Startup fetch failures share
//! the same enum so the binary can report them uniformly before aborting.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error types for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No record with this id
    #[error("Record {id} not found")]
    NotFound { id: u32 },

    /// Requested page is past the last page
    #[error("There are only {total_pages} pages available")]
    PageOutOfRange { page: usize, total_pages: usize },

    /// Search produced no records
    #[error("No records match {key} = {value}")]
    NoMatch { key: String, value: String },

    /// Create with an id that is already stored
    #[error("Record with id {id} already exists")]
    Conflict { id: u32 },

    /// Payload id differs from the targeted id
    #[error("Cannot change record id: path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: u32, body_id: u32 },

    /// Field name not present in the record schema
    #[error("Invalid field: {field}")]
    InvalidField { field: String },

    /// Malformed field value or violated constraint
    #[error("Validation failed: {0}")]
    Validation(String),

    /// URL did not answer the reachability probe
    #[error("Invalid or inaccessible {field}: {url}")]
    UnreachableResource { field: &'static str, url: String },

    /// Startup dataset fetch failed
    #[error("Failed to load records from upstream: {0}")]
    UpstreamFetch(String),

    /// Malformed request at the HTTP edge (path, query or body)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Path outside the routed collection
    #[error("No route for {path}")]
    UnknownRoute { path: String },

    /// Known path, unsupported method
    #[error("Method not allowed; allowed methods: {allow}")]
    MethodNotAllowed { allow: &'static str },

    /// Request body over the configured limit
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

/// Machine-distinguishable error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ValidationError,
    UnreachableResource,
    UpstreamFetchFailure,
    BadRequest,
    MethodNotAllowed,
    PayloadTooLarge,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ValidationError => "validation_error",
            Self::UnreachableResource => "unreachable_resource",
            Self::UpstreamFetchFailure => "upstream_fetch_failure",
            Self::BadRequest => "bad_request",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RegistryError {
    /// Category reported to clients
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. }
            | Self::PageOutOfRange { .. }
            | Self::NoMatch { .. }
            | Self::UnknownRoute { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::IdMismatch { .. } | Self::InvalidField { .. } | Self::Validation(_) => {
                ErrorKind::ValidationError
            }
            Self::UnreachableResource { .. } => ErrorKind::UnreachableResource,
            Self::UpstreamFetch(_) => ErrorKind::UpstreamFetchFailure,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed,
            Self::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
        }
    }

    /// HTTP status used when the error crosses the API boundary
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict
            | ErrorKind::ValidationError
            | ErrorKind::UnreachableResource
            | ErrorKind::BadRequest => 400,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::UpstreamFetchFailure => 502,
        }
    }

    /// Whether the failure is attributable to the request rather than upstream
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
