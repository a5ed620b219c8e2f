#![allow(dead_code)]

use async_trait::async_trait;
use pokedex_rust::{
    AbilityRef, CandidateEntry, CreatureService, EntityRecord, LookupError, StatEntry, TypeRef,
    TypeRelations,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn creature(id: u32, name: &str, types: &[&str]) -> EntityRecord {
    EntityRecord {
        id,
        name: name.to_string(),
        sprite_url: Some(format!("https://sprites.test/{}.png", id)),
        types: types
            .iter()
            .map(|t| TypeRef {
                name: t.to_string(),
                relations_url: format!("https://pokeapi.test/type/{}", t),
            })
            .collect(),
        abilities: vec![AbilityRef {
            name: "static".to_string(),
        }],
        stats: vec![StatEntry {
            name: "hp".to_string(),
            value: 35,
        }],
        height: 4,
        weight: 60,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// In-memory service. Entities are looked up by lowercased name, like the real
/// client does. A gated key ("candidates", "entity:<name>" or "type:<name>") blocks
/// its request until `release` is called.
#[derive(Default)]
pub struct ScriptedService {
    candidates: Option<Vec<CandidateEntry>>,
    entities: HashMap<String, EntityRecord>,
    relations: HashMap<String, TypeRelations>,
    failing_types: HashSet<String>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    list_requests: Mutex<usize>,
    entity_requests: Mutex<Vec<String>>,
    type_requests: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(mut self, list: &[&str]) -> Self {
        self.candidates = Some(list.iter().map(|n| CandidateEntry::named(n)).collect());
        self
    }

    pub fn with_entity(mut self, record: EntityRecord) -> Self {
        self.entities.insert(record.name.to_lowercase(), record);
        self
    }

    pub fn with_type(mut self, name: &str, strong: &[&str], weak: &[&str]) -> Self {
        self.relations
            .insert(name.to_string(), TypeRelations::new(names(strong), names(weak)));
        self
    }

    pub fn failing_type(mut self, name: &str) -> Self {
        self.failing_types.insert(name.to_string());
        self
    }

    pub fn gated(self, key: &str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Notify::new()));
        self
    }

    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(key) {
            gate.notify_one();
        }
    }

    pub fn list_requests(&self) -> usize {
        *self.list_requests.lock().unwrap()
    }

    pub fn entity_requests(&self) -> Vec<String> {
        self.entity_requests.lock().unwrap().clone()
    }

    pub fn type_requests(&self) -> Vec<String> {
        self.type_requests.lock().unwrap().clone()
    }

    async fn wait_gate(&self, key: &str) {
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl CreatureService for ScriptedService {
    async fn list_candidates(&self, limit: usize) -> Result<Vec<CandidateEntry>, LookupError> {
        *self.list_requests.lock().unwrap() += 1;
        self.wait_gate("candidates").await;
        match &self.candidates {
            Some(list) => Ok(list.iter().take(limit).cloned().collect()),
            None => Err(LookupError::Network("connection refused".to_string())),
        }
    }

    async fn fetch_entity(&self, name: &str) -> Result<EntityRecord, LookupError> {
        self.entity_requests.lock().unwrap().push(name.to_string());
        let key = name.to_lowercase();
        self.wait_gate(&format!("entity:{}", key)).await;
        self.entities
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    async fn fetch_type_relations(&self, type_ref: &TypeRef) -> Result<TypeRelations, LookupError> {
        self.type_requests.lock().unwrap().push(type_ref.name.clone());
        self.wait_gate(&format!("type:{}", type_ref.name)).await;
        if self.failing_types.contains(&type_ref.name) {
            return Err(LookupError::Service(format!(
                "GET {} failed with status 500",
                type_ref.relations_url
            )));
        }
        Ok(self
            .relations
            .get(&type_ref.name)
            .cloned()
            .unwrap_or_default())
    }
}
