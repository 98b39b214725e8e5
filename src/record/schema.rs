//! Creature record types as stored and served by the registry
//!
//! Field names match the wire format. The upstream dataset spells the
//! resource link `pokemon_url`; it is accepted on input and always emitted
//! as `resource_url`.

use serde::{Deserialize, Serialize};

/// One creature entry, keyed by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub xp: i64,
    pub image_url: String,
    #[serde(alias = "pokemon_url")]
    pub resource_url: String,
    #[serde(default, alias = "ability")]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default, alias = "type")]
    pub types: Vec<CreatureType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_stat: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureType {
    pub name: String,
}
