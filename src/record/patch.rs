//! Partial updates applied to a detached copy of a record

use serde_json::{Map, Value};

use super::fields::Field;
use super::schema::Record;
use crate::errors::{RegistryError, RegistryResult};

impl Record {
    /// Produce a copy of this record with `updates` applied
    ///
    /// Every key must name a field of the schema; the first unknown key (in
    /// request order) fails the whole patch. The result must decode as a full
    /// record and keep the original id. Value constraints are checked only for
    /// the fields the patch names. `self` is never modified.
    pub fn patched(&self, updates: &Map<String, Value>) -> RegistryResult<Record> {
        let mut resolved = Vec::with_capacity(updates.len());
        for (key, value) in updates {
            let field = Field::parse(key)
                .ok_or_else(|| RegistryError::InvalidField { field: key.clone() })?;
            resolved.push((field, value));
        }

        let mut document = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                return Err(RegistryError::Validation(format!(
                    "record {} could not be represented as an object",
                    self.id
                )));
            }
        };

        for (field, value) in &resolved {
            document.insert(field.as_str().to_string(), (*value).clone());
        }

        let candidate: Record = serde_json::from_value(Value::Object(document))
            .map_err(|e| RegistryError::Validation(format!("invalid value in patch: {e}")))?;

        if candidate.id != self.id {
            return Err(RegistryError::IdMismatch {
                path_id: self.id,
                body_id: candidate.id,
            });
        }

        let touched: Vec<Field> = resolved.iter().map(|(field, _)| *field).collect();
        candidate.validate_fields(&touched)?;
        Ok(candidate)
    }
}
