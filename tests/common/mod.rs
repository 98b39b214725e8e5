//! Test utilities and helper functions for the creature registry test suite

use futures::future::BoxFuture;
use kodegen_tools_creatures::{
    Ability, CreatureApi, CreatureType, Record, RecordStore, ServiceConfig, Stat, UrlProbe,
};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Builds a fully valid record with predictable values
#[allow(dead_code)]
pub fn sample_record(id: u32) -> Record {
    Record {
        id,
        name: format!("creature-{id}"),
        height: 7 + id,
        weight: 60 + id,
        xp: 64,
        image_url: format!("https://img.example.com/{id}.png"),
        resource_url: format!("https://api.example.com/pokemon/{id}/"),
        abilities: vec![Ability {
            name: "overgrow".to_string(),
            is_hidden: false,
        }],
        stats: vec![Stat {
            name: "hp".to_string(),
            base_stat: 45,
        }],
        types: vec![CreatureType {
            name: "grass".to_string(),
        }],
    }
}

/// Store pre-populated with one sample record per id, in order
#[allow(dead_code)]
pub fn store_with(ids: impl IntoIterator<Item = u32>) -> Arc<RecordStore> {
    Arc::new(RecordStore::from_records(ids.into_iter().map(sample_record)))
}

/// Probe stub that never touches the network
///
/// Reports every URL reachable except those explicitly marked unreachable,
/// and records every URL it was asked about.
#[allow(dead_code)]
#[derive(Default)]
pub struct StubProbe {
    unreachable: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubProbe {
    pub fn all_reachable() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn unreachable(urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            unreachable: urls.iter().map(|u| (*u).to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl UrlProbe for StubProbe {
    fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool> {
        self.calls.lock().push(url.to_string());
        let reachable = !self.unreachable.contains(url);
        Box::pin(async move { reachable })
    }
}

/// Configuration pointing at a placeholder dataset
#[allow(dead_code)]
pub fn test_config() -> ServiceConfig {
    ServiceConfig::builder()
        .data_url("https://data.example.com/records.json")
        .build()
        .expect("Failed to create test config")
}

/// API over the given store with a stub probe
#[allow(dead_code)]
pub fn api_over(store: Arc<RecordStore>, probe: Arc<StubProbe>) -> CreatureApi {
    CreatureApi::new(store, probe, test_config())
}

/// Serialize records the way the upstream dataset does (`pokemon_url`)
#[allow(dead_code)]
pub fn upstream_payload(records: &[Record]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            let mut value = serde_json::to_value(r).expect("record serializes");
            let object = value.as_object_mut().expect("record is an object");
            let url = object.remove("resource_url").expect("resource_url present");
            object.insert("pokemon_url".to_string(), url);
            value
        })
        .collect();
    serde_json::to_string(&items).expect("payload serializes")
}
