//! Query Engine: read-only access to the record store
//!
//! Every query runs under one read lock so a page or search result is a
//! consistent snapshot of the store.

pub mod pagination;
pub mod search;

pub use pagination::{Page, PageRequest, paginate, total_pages};
pub use search::search;

use std::sync::Arc;

use crate::errors::RegistryResult;
use crate::record::Record;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<RecordStore>,
}

impl QueryEngine {
    #[must_use]
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, id: u32) -> RegistryResult<Record> {
        self.store.get(id)
    }

    #[must_use]
    pub fn list(&self) -> Vec<Record> {
        self.store.get_all()
    }

    pub fn page(&self, request: PageRequest) -> RegistryResult<Page> {
        self.store.view(|records| paginate(records, request))
    }

    pub fn search(&self, key: &str, value: &str) -> RegistryResult<Vec<Record>> {
        self.store.view(|records| search(records, key, value))
    }
}
