//! Data Loader: populates the record store once at startup
//!
//! The import is trusted: records are not validated and their URLs are not
//! probed. Each array element is decoded on its own, so a single malformed
//! entry is skipped rather than failing the whole load.

pub mod fetch;

pub use fetch::DatasetFetcher;

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::ServiceConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::record::Record;
use crate::store::RecordStore;

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Records present in the store after the import
    pub loaded: usize,
    /// Array elements that did not decode into a record
    pub skipped: usize,
    /// Elements whose id repeated an earlier element
    pub duplicates: usize,
}

/// Decoded dataset, before it is handed to the store
#[derive(Debug, Default)]
pub struct DecodedDataset {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Decode a JSON array of record-shaped objects
///
/// Fails when the payload is not a JSON array, or when it has entries and
/// none of them decode.
pub fn decode_records(bytes: &[u8]) -> RegistryResult<DecodedDataset> {
    let payload: Value = serde_json::from_slice(bytes)
        .map_err(|e| RegistryError::UpstreamFetch(format!("dataset is not valid JSON: {e}")))?;

    let Value::Array(items) = payload else {
        return Err(RegistryError::UpstreamFetch(
            "dataset must be a JSON array of records".to_string(),
        ));
    };

    let mut dataset = DecodedDataset {
        records: Vec::with_capacity(items.len()),
        skipped: 0,
    };

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Record>(item) {
            Ok(record) => dataset.records.push(record),
            Err(e) => {
                warn!("Skipping dataset entry {index}: {e}");
                dataset.skipped += 1;
            }
        }
    }

    if dataset.records.is_empty() && dataset.skipped > 0 {
        return Err(RegistryError::UpstreamFetch(format!(
            "none of the {} dataset entries could be decoded",
            dataset.skipped
        )));
    }

    Ok(dataset)
}

/// Fetches the dataset and bulk-loads it into a store
#[derive(Debug, Clone)]
pub struct DataLoader {
    fetcher: DatasetFetcher,
    data_url: String,
}

impl DataLoader {
    pub fn new(config: &ServiceConfig) -> RegistryResult<Self> {
        Ok(Self {
            fetcher: DatasetFetcher::new(config)?,
            data_url: config.data_url().to_string(),
        })
    }

    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Fetch, decode and import into `store`
    ///
    /// Any failure here is fatal to startup; the store is left untouched.
    pub async fn load_into(&self, store: &RecordStore) -> RegistryResult<LoadSummary> {
        info!("Loading records from {}", self.data_url);
        let bytes = self.fetcher.fetch(&self.data_url).await?;
        let dataset = decode_records(&bytes)?;

        let duplicates = store.bulk_load(dataset.records);
        let summary = LoadSummary {
            loaded: store.len(),
            skipped: dataset.skipped,
            duplicates,
        };

        info!(
            "Loaded {} records ({} skipped, {} duplicate ids)",
            summary.loaded, summary.skipped, summary.duplicates
        );
        Ok(summary)
    }
}
