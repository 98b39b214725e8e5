//! In-memory record store keyed by id
//!
//! Records live in an insertion-ordered map so that listing and pagination
//! iterate in a stable order while lookups stay O(1). All access goes
//! through a single `RwLock`; no lock is ever held across an `.await`.

use indexmap::IndexMap;
use log::{debug, warn};
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::errors::{RegistryError, RegistryResult};
use crate::record::Record;

/// Initial capacity for the record map
///
/// The upstream dataset holds roughly a thousand entries.
const STORE_INITIAL_CAPACITY: usize = 1024;

/// Shared, lock-guarded collection of records
///
/// The store is the single source of truth. It enforces the id invariants
/// itself (unique on insert, present and immutable on replace, present on
/// delete and patch), so callers that pre-check for a fast reject still get
/// a consistent answer if another request raced them.
#[derive(Debug)]
pub struct RecordStore {
    records: RwLock<IndexMap<u32, Record>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::with_capacity(STORE_INITIAL_CAPACITY)),
        }
    }

    /// Build a store from records without validation
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let store = Self::new();
        store.bulk_load(records);
        store
    }

    /// Trusted bulk import used at startup
    ///
    /// Skips validation and URL checks. A repeated id replaces the earlier
    /// value in place. Returns the number of duplicates seen.
    pub fn bulk_load(&self, records: impl IntoIterator<Item = Record>) -> usize {
        let mut map = self.records.write();
        let mut duplicates = 0;
        for record in records {
            let id = record.id;
            if map.insert(id, record).is_some() {
                warn!("Bulk import contained duplicate id {id}; keeping the later entry");
                duplicates += 1;
            }
        }
        duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.records.read().contains_key(&id)
    }

    pub fn get(&self, id: u32) -> RegistryResult<Record> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    /// All records in insertion order
    #[must_use]
    pub fn get_all(&self) -> Vec<Record> {
        self.records.read().values().cloned().collect()
    }

    /// Run `f` against the records under a single read lock
    pub fn view<R>(&self, f: impl FnOnce(&IndexMap<u32, Record>) -> R) -> R {
        f(&self.records.read())
    }

    pub fn insert(&self, record: Record) -> RegistryResult<()> {
        let mut map = self.records.write();
        if map.contains_key(&record.id) {
            return Err(RegistryError::Conflict { id: record.id });
        }
        debug!("Inserting record {}", record.id);
        map.insert(record.id, record);
        Ok(())
    }

    /// Replace a stored record wholesale, keeping its position
    pub fn replace(&self, id: u32, record: Record) -> RegistryResult<Record> {
        if record.id != id {
            return Err(RegistryError::IdMismatch {
                path_id: id,
                body_id: record.id,
            });
        }
        let mut map = self.records.write();
        let slot = map.get_mut(&id).ok_or(RegistryError::NotFound { id })?;
        *slot = record.clone();
        Ok(record)
    }

    /// Remove a record, returning it
    pub fn delete(&self, id: u32) -> RegistryResult<Record> {
        self.records
            .write()
            .shift_remove(&id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// Apply a field-name → value mapping atomically
    ///
    /// The patch is built on a copy; the stored record is swapped only when
    /// every key is recognized and the result validates.
    pub fn apply_patch(&self, id: u32, updates: &Map<String, Value>) -> RegistryResult<Record> {
        let mut map = self.records.write();
        let slot = map.get_mut(&id).ok_or(RegistryError::NotFound { id })?;
        let patched = slot.patched(updates)?;
        *slot = patched.clone();
        Ok(patched)
    }
}
