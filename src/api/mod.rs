//! Framework-agnostic HTTP surface
//!
//! Requests arrive as [`ApiRequest`] values, are matched by [`routes`], and
//! leave as [`ApiResponse`] values with a status and a JSON body. The
//! transport that produces and consumes them lives in [`crate::server`].

/// Emit one structured event per handled request
macro_rules! log_request {
    ($method:expr, $path:expr, $status:expr, $start:expr) => {{
        let duration = $start.elapsed();
        if $status.is_server_error() {
            tracing::error!(
                method = %$method,
                path = %$path,
                status = $status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request failed"
            );
        } else {
            tracing::info!(
                method = %$method,
                path = %$path,
                status = $status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request handled"
            );
        }
    }};
}

pub mod handlers;
pub mod request;
pub mod response;
pub mod routes;

pub use request::ApiRequest;
pub use response::ApiResponse;
pub use routes::{COLLECTION, Resolution, Route, resolve};

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::mutation::MutationEngine;
use crate::query::QueryEngine;
use crate::reachability::UrlProbe;
use crate::store::RecordStore;

/// Request handler over one shared store
///
/// Cheap to clone; every clone serves the same store.
#[derive(Debug, Clone)]
pub struct CreatureApi {
    queries: QueryEngine,
    mutations: MutationEngine,
    config: Arc<ServiceConfig>,
}

impl CreatureApi {
    #[must_use]
    pub fn new(store: Arc<RecordStore>, probe: Arc<dyn UrlProbe>, config: ServiceConfig) -> Self {
        Self {
            queries: QueryEngine::new(Arc::clone(&store)),
            mutations: MutationEngine::new(store, probe),
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[must_use]
    pub fn queries(&self) -> &QueryEngine {
        &self.queries
    }

    #[must_use]
    pub fn mutations(&self) -> &MutationEngine {
        &self.mutations
    }
}
