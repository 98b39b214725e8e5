//! Record schema, field catalogue, validation and patch application

pub mod fields;
pub mod patch;
pub mod schema;
pub mod validation;

pub use fields::{Field, stringify};
pub use schema::{Ability, CreatureType, Record, Stat};
