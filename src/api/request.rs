//! Transport-independent request representation

use reqwest::Method;
use serde_json::Value;

use crate::errors::{RegistryError, RegistryResult};

/// A decoded HTTP request as seen by the router
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Percent-decoded path, without the query string
    pub path: String,
    /// Percent-decoded query pairs in request order
    pub query: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Build a request from a method and a request target (`/path?query`)
    #[must_use]
    pub fn new(method: Method, target: &str) -> Self {
        let (raw_path, raw_query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        let query = raw_query
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((k, v)) => (decode_component(k), decode_component(v)),
                        None => (decode_component(pair), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method,
            path: decode_path(raw_path),
            query,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_json(self, value: &Value) -> Self {
        self.with_body(value.to_string())
    }

    /// First value for a query parameter
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Query parameter parsed as an unsigned integer, or `default` when absent
    pub fn query_usize(&self, name: &str, default: usize) -> RegistryResult<usize> {
        match self.query_param(name) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                RegistryError::BadRequest(format!("{name} must be a positive integer, got '{raw}'"))
            }),
        }
    }

    pub fn required_param(&self, name: &str) -> RegistryResult<&str> {
        self.query_param(name).ok_or_else(|| {
            RegistryError::BadRequest(format!("missing required query parameter '{name}'"))
        })
    }

    /// Decode the body as JSON
    ///
    /// Syntax errors and an empty body are `BadRequest`; well-formed JSON of
    /// the wrong shape is a `Validation` error.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> RegistryResult<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(RegistryError::BadRequest(
                "request body is required".to_string(),
            ));
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            if e.is_data() {
                RegistryError::Validation(e.to_string())
            } else {
                RegistryError::BadRequest(format!("malformed JSON body: {e}"))
            }
        })
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn decode_path(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
