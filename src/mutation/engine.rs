//! Create, replace, patch and delete with identifier and URL invariants
//!
//! Probes run before the store's write lock is taken; the store re-checks
//! id presence or absence when it commits, so a racing request can never
//! overwrite or resurrect a record.

use log::info;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::errors::{RegistryError, RegistryResult};
use crate::reachability::{UrlProbe, ensure_reachable};
use crate::record::Record;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct MutationEngine {
    store: Arc<RecordStore>,
    probe: Arc<dyn UrlProbe>,
}

impl std::fmt::Debug for MutationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationEngine")
            .field("records", &self.store.len())
            .finish_non_exhaustive()
    }
}

impl MutationEngine {
    #[must_use]
    pub fn new(store: Arc<RecordStore>, probe: Arc<dyn UrlProbe>) -> Self {
        Self { store, probe }
    }

    /// Admit a new record
    ///
    /// Checks run in order: schema, id conflict, URL reachability.
    pub async fn create(&self, record: Record) -> RegistryResult<Record> {
        record.validate()?;
        if self.store.contains(record.id) {
            return Err(RegistryError::Conflict { id: record.id });
        }
        ensure_reachable(self.probe.as_ref(), &record).await?;

        self.store.insert(record.clone())?;
        info!("Created record {} ({})", record.id, record.name);
        Ok(record)
    }

    /// Replace the record at `id` wholesale
    ///
    /// Checks run in order: presence, id drift, schema, URL reachability.
    pub async fn replace(&self, id: u32, record: Record) -> RegistryResult<Record> {
        if !self.store.contains(id) {
            return Err(RegistryError::NotFound { id });
        }
        if record.id != id {
            return Err(RegistryError::IdMismatch {
                path_id: id,
                body_id: record.id,
            });
        }
        record.validate()?;
        ensure_reachable(self.probe.as_ref(), &record).await?;

        let stored = self.store.replace(id, record)?;
        info!("Replaced record {id}");
        Ok(stored)
    }

    /// Apply a partial update without re-probing URLs
    pub fn patch(&self, id: u32, updates: &Map<String, Value>) -> RegistryResult<Record> {
        let patched = self.store.apply_patch(id, updates)?;
        info!(
            "Patched record {id} ({} field{})",
            updates.len(),
            if updates.len() == 1 { "" } else { "s" }
        );
        Ok(patched)
    }

    pub fn delete(&self, id: u32) -> RegistryResult<Record> {
        let removed = self.store.delete(id)?;
        info!("Deleted record {id}");
        Ok(removed)
    }
}
