//! Transport-independent response representation

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::errors::RegistryError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
    /// Value for an `Allow` header on 405 responses
    pub allow: Option<&'static str>,
}

impl ApiResponse {
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    #[must_use]
    pub fn created(body: Value) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    #[must_use]
    pub fn with_status(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            allow: None,
        }
    }

    /// Structured error body: `{"error": {"kind", "message"}}`
    #[must_use]
    pub fn from_error(error: &RegistryError) -> Self {
        let status =
            StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut detail = json!({
            "kind": error.kind(),
            "message": error.to_string(),
        });
        if let RegistryError::PageOutOfRange { total_pages, .. } = error {
            detail["total_pages"] = json!(total_pages);
        }
        Self::with_status(status, json!({ "error": detail }))
    }

    #[must_use]
    pub fn route_not_found(path: &str) -> Self {
        Self::from_error(&RegistryError::UnknownRoute {
            path: path.to_string(),
        })
    }

    #[must_use]
    pub fn method_not_allowed(allow: &'static str) -> Self {
        let mut response = Self::from_error(&RegistryError::MethodNotAllowed { allow });
        response.allow = Some(allow);
        response
    }

    #[must_use]
    pub fn payload_too_large(limit: usize) -> Self {
        Self::from_error(&RegistryError::PayloadTooLarge { limit })
    }

    /// Error kind string, when this is an error response
    #[must_use]
    pub fn error_kind(&self) -> Option<&str> {
        self.body.get("error")?.get("kind")?.as_str()
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.body.to_string().into_bytes()
    }
}
