//! Exact key/value search over stringified field values

use indexmap::IndexMap;

use crate::errors::{RegistryError, RegistryResult};
use crate::record::{Field, Record};

/// All records whose `key` field stringifies to exactly `value`
///
/// An unrecognized key fails with `InvalidField` regardless of `value`.
/// Zero matches is `NoMatch`, never an empty success.
pub fn search(
    records: &IndexMap<u32, Record>,
    key: &str,
    value: &str,
) -> RegistryResult<Vec<Record>> {
    let field = Field::parse(key).ok_or_else(|| RegistryError::InvalidField {
        field: key.to_string(),
    })?;

    let matches: Vec<Record> = records
        .values()
        .filter(|record| record.field_string(field) == value)
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(RegistryError::NoMatch {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(matches)
}
