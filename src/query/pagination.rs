//! Page-window listing over the record store

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::{RegistryError, RegistryResult};
use crate::record::Record;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Validate `page ≥ 1` and `1 ≤ size ≤ max_size`
    pub fn new(page: usize, size: usize, max_size: usize) -> RegistryResult<Self> {
        if page == 0 {
            return Err(RegistryError::BadRequest(
                "page must be greater than or equal to 1".to_string(),
            ));
        }
        if size == 0 || size > max_size {
            return Err(RegistryError::BadRequest(format!(
                "size must be between 1 and {max_size}, got {size}"
            )));
        }
        Ok(Self { page, size })
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-based offset of the first record on this page
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// Page envelope returned by paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: usize,
    pub size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub records: Vec<Record>,
}

#[must_use]
pub fn total_pages(total_items: usize, size: usize) -> usize {
    total_items.div_ceil(size)
}

/// Cut one page out of the records in iteration order
///
/// A page past the last one fails with `PageOutOfRange`. An empty
/// collection has zero pages; page 1 of it is an empty window.
pub fn paginate(records: &IndexMap<u32, Record>, request: PageRequest) -> RegistryResult<Page> {
    let total_items = records.len();
    let total_pages = total_pages(total_items, request.size);

    if request.page > total_pages.max(1) {
        return Err(RegistryError::PageOutOfRange {
            page: request.page,
            total_pages,
        });
    }

    let window = records
        .values()
        .skip(request.offset())
        .take(request.size)
        .cloned()
        .collect();

    Ok(Page {
        page: request.page,
        size: request.size,
        total_items,
        total_pages,
        records: window,
    })
}
