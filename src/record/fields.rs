//! Field catalogue for key/value search and partial updates

use serde_json::Value;
use std::fmt;

use super::schema::Record;

/// A recognized top-level attribute of [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Height,
    Weight,
    Xp,
    ImageUrl,
    ResourceUrl,
    Abilities,
    Stats,
    Types,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Id,
        Field::Name,
        Field::Height,
        Field::Weight,
        Field::Xp,
        Field::ImageUrl,
        Field::ResourceUrl,
        Field::Abilities,
        Field::Stats,
        Field::Types,
    ];

    /// Resolve a wire name (or accepted alias) to a field
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "height" => Some(Self::Height),
            "weight" => Some(Self::Weight),
            "xp" => Some(Self::Xp),
            "image_url" => Some(Self::ImageUrl),
            "resource_url" | "pokemon_url" => Some(Self::ResourceUrl),
            "abilities" | "ability" => Some(Self::Abilities),
            "stats" => Some(Self::Stats),
            "types" | "type" => Some(Self::Types),
            _ => None,
        }
    }

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Xp => "xp",
            Self::ImageUrl => "image_url",
            Self::ResourceUrl => "resource_url",
            Self::Abilities => "abilities",
            Self::Stats => "stats",
            Self::Types => "types",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record {
    /// String form of a field, as compared by key/value search
    ///
    /// Strings compare by raw content and integers by decimal rendering;
    /// sequences render as compact JSON.
    #[must_use]
    pub fn field_string(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::Name => self.name.clone(),
            Field::Height => self.height.to_string(),
            Field::Weight => self.weight.to_string(),
            Field::Xp => self.xp.to_string(),
            Field::ImageUrl => self.image_url.clone(),
            Field::ResourceUrl => self.resource_url.clone(),
            Field::Abilities => compact_json(&self.abilities),
            Field::Stats => compact_json(&self.stats),
            Field::Types => compact_json(&self.types),
        }
    }
}

fn compact_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .map(|v| stringify(&v))
        .unwrap_or_default()
}

/// Render a JSON value the way search compares it
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
