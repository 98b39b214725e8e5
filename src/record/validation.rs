//! Explicit per-entity validation
//!
//! Structural typing (integer widths, required keys) is enforced by serde
//! when a record is decoded. The checks here cover the value constraints
//! serde cannot express.

use super::fields::Field;
use super::schema::Record;
use crate::errors::{RegistryError, RegistryResult};
use crate::utils::is_valid_url;

impl Record {
    /// Check field constraints, reporting the first violation
    ///
    /// Does not probe URLs; see [`crate::reachability`].
    pub fn validate(&self) -> RegistryResult<()> {
        self.validate_fields(&Field::ALL)
    }

    /// Check constraints of the listed fields only
    ///
    /// Used for partial updates, where untouched fields keep whatever value
    /// the trusted import gave them.
    pub fn validate_fields(&self, fields: &[Field]) -> RegistryResult<()> {
        for field in fields {
            self.validate_field(*field)?;
        }
        Ok(())
    }

    fn validate_field(&self, field: Field) -> RegistryResult<()> {
        match field {
            Field::Id if self.id == 0 => Err(invalid("id must be a positive integer")),
            Field::Name if self.name.trim().is_empty() => Err(invalid("name must not be empty")),
            Field::ImageUrl if !is_valid_url(&self.image_url) => Err(invalid(format!(
                "image_url is not a valid http(s) URL: {}",
                self.image_url
            ))),
            Field::ResourceUrl if !is_valid_url(&self.resource_url) => Err(invalid(format!(
                "resource_url is not a valid http(s) URL: {}",
                self.resource_url
            ))),
            Field::Stats => match self.stats.iter().find(|s| s.base_stat <= 0) {
                Some(stat) => Err(invalid(format!(
                    "stats.{}.base_stat must be greater than 0, got {}",
                    stat.name, stat.base_stat
                ))),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

fn invalid(message: impl Into<String>) -> RegistryError {
    RegistryError::Validation(message.into())
}
