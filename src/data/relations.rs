use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Double-damage matchups of one type. Lists keep service order and hold no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
}

impl TypeRelations {
    pub fn new<I, J>(strong_against: I, weak_against: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            strong_against: dedup_in_order(strong_against),
            weak_against: dedup_in_order(weak_against),
        }
    }

    /// Parses a `/type/<id>` document, keeping only the double-damage categories.
    pub fn load_from_json_str(json: &str) -> Result<Self, LookupError> {
        let wire: TypeDocumentWire = serde_json::from_str(json)?;
        Ok(Self::from(wire))
    }
}

fn dedup_in_order<I: IntoIterator<Item = String>>(names: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Matchups keyed by type name, for the types of the displayed creature only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    by_type: HashMap<String, TypeRelations>,
}

impl DamageRelations {
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }

    pub fn insert(&mut self, type_name: String, relations: TypeRelations) {
        self.by_type.insert(type_name, relations);
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeRelations> {
        self.by_type.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.by_type.keys().map(|k| k.as_str())
    }

    pub fn as_map(&self) -> &HashMap<String, TypeRelations> {
        &self.by_type
    }
}

impl FromIterator<(String, TypeRelations)> for DamageRelations {
    fn from_iter<T: IntoIterator<Item = (String, TypeRelations)>>(iter: T) -> Self {
        Self {
            by_type: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
struct NamedWire {
    name: String,
}

// Other categories (half_damage_*, no_damage_*) are ignored by serde.
#[derive(Clone, Debug, Default, Deserialize)]
struct DamageRelationsWire {
    #[serde(default)]
    double_damage_to: Vec<NamedWire>,
    #[serde(default)]
    double_damage_from: Vec<NamedWire>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TypeDocumentWire {
    damage_relations: DamageRelationsWire,
}

impl From<TypeDocumentWire> for TypeRelations {
    fn from(wire: TypeDocumentWire) -> Self {
        TypeRelations::new(
            wire.damage_relations
                .double_damage_to
                .into_iter()
                .map(|n| n.name),
            wire.damage_relations
                .double_damage_from
                .into_iter()
                .map(|n| n.name),
        )
    }
}
