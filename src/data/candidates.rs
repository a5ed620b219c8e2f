use crate::error::LookupError;
use crate::tools::pokeapi::CreatureService;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl CandidateEntry {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CandidateListWire {
    #[serde(default)]
    results: Vec<CandidateEntry>,
}

/// Full catalog of names eligible for autocomplete, in service order.
#[derive(Clone, Debug, Default)]
pub struct CandidateIndex {
    entries: Vec<CandidateEntry>,
}

impl CandidateIndex {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<CandidateEntry>) -> Self {
        Self { entries }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: names
                .into_iter()
                .map(|name| CandidateEntry::named(name.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateEntry> {
        self.entries.iter()
    }

    /// Exact name match, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.entries.iter().any(|e| e.name.to_lowercase() == needle)
    }

    /// Accepts either the raw `{"results": [...]}` list document or a bare array.
    pub fn load_from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        let entries: Vec<CandidateEntry> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            let wire: CandidateListWire = serde_json::from_value(value)?;
            wire.results
        };
        Ok(Self::from_entries(entries))
    }

    pub async fn load<S>(service: &S, limit: usize) -> Result<Self, LookupError>
    where
        S: CreatureService + ?Sized,
    {
        let entries = service.list_candidates(limit).await?;
        tracing::info!(count = entries.len(), "candidate index loaded");
        Ok(Self::from_entries(entries))
    }
}
