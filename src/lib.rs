pub mod api;
pub mod config;
pub mod errors;
pub mod loader;
pub mod mutation;
pub mod query;
pub mod reachability;
pub mod record;
pub mod server;
pub mod store;
pub mod utils;

pub use api::{ApiRequest, ApiResponse, CreatureApi};
pub use config::ServiceConfig;
pub use errors::{ErrorKind, RegistryError, RegistryResult};
pub use loader::{DataLoader, LoadSummary};
pub use mutation::MutationEngine;
pub use query::{Page, PageRequest, QueryEngine};
pub use reachability::{HttpUrlProbe, UrlProbe};
pub use record::{Ability, CreatureType, Field, Record, Stat};
pub use store::RecordStore;

use std::sync::Arc;

/// Load the dataset named by `config` and build an API over it
///
/// Fails with [`RegistryError::UpstreamFetch`] when the dataset cannot be
/// retrieved; no API is produced over an empty or partial store.
pub async fn load_api(
    config: ServiceConfig,
    probe: Arc<dyn UrlProbe>,
) -> RegistryResult<(CreatureApi, LoadSummary)> {
    let store = Arc::new(RecordStore::new());
    let summary = DataLoader::new(&config)?.load_into(&store).await?;
    Ok((CreatureApi::new(store, probe, config), summary))
}
