use crate::error::LookupError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub relations_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRef {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: i32,
}

/// A creature as displayed. `types` is never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
    pub types: Vec<TypeRef>,
    pub abilities: Vec<AbilityRef>,
    pub stats: Vec<StatEntry>,
    /// Decimetres, as delivered by the service.
    pub height: u32,
    /// Hectograms, as delivered by the service.
    pub weight: u32,
}

impl EntityRecord {
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, LookupError> {
        let wire: EntityWire = serde_json::from_str(json)?;
        EntityRecord::try_from(wire)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct NamedResourceWire {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct SpritesWire {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct TypeSlotWire {
    #[serde(rename = "type")]
    type_ref: NamedResourceWire,
}

#[derive(Clone, Debug, Deserialize)]
struct AbilitySlotWire {
    ability: NamedResourceWire,
}

#[derive(Clone, Debug, Deserialize)]
struct StatWire {
    stat: NamedResourceWire,
    base_stat: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct EntityWire {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: SpritesWire,
    #[serde(default)]
    types: Vec<TypeSlotWire>,
    #[serde(default)]
    abilities: Vec<AbilitySlotWire>,
    #[serde(default)]
    stats: Vec<StatWire>,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
}

impl TryFrom<EntityWire> for EntityRecord {
    type Error = LookupError;

    fn try_from(wire: EntityWire) -> Result<Self, Self::Error> {
        if wire.types.is_empty() {
            return Err(LookupError::Service(format!(
                "creature '{}' has no types",
                wire.name
            )));
        }
        Ok(Self {
            id: wire.id,
            name: wire.name,
            sprite_url: wire.sprites.front_default,
            types: wire
                .types
                .into_iter()
                .map(|slot| TypeRef {
                    name: slot.type_ref.name,
                    relations_url: slot.type_ref.url,
                })
                .collect(),
            abilities: wire
                .abilities
                .into_iter()
                .map(|slot| AbilityRef {
                    name: slot.ability.name,
                })
                .collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            height: wire.height,
            weight: wire.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu_json() -> serde_json::Value {
        json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {"front_default": "https://example.test/25.png", "back_default": null},
            "types": [
                {
                    "slot": 1,
                    "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}
                }
            ],
            "abilities": [
                {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
            ],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
            ]
        })
    }

    #[test]
    fn test_entity_from_service_payload() {
        let record = EntityRecord::load_from_json_str(&pikachu_json().to_string()).expect("parse");
        assert_eq!(record.id, 25);
        assert_eq!(record.sprite_url.as_deref(), Some("https://example.test/25.png"));
        assert_eq!(record.type_names().collect::<Vec<_>>(), vec!["electric"]);
        assert_eq!(record.types[0].relations_url, "https://pokeapi.co/api/v2/type/13/");
        assert_eq!(record.abilities[1].name, "lightning-rod");
        assert_eq!(record.stats[1], StatEntry { name: "speed".to_string(), value: 90 });
    }

    #[test]
    fn test_entity_without_types_is_rejected() {
        let mut value = pikachu_json();
        value["types"] = json!([]);
        let err = EntityRecord::load_from_json_str(&value.to_string()).expect_err("should fail");
        assert!(matches!(err, LookupError::Service(_)));
    }

    #[test]
    fn test_missing_sprite_is_none() {
        let mut value = pikachu_json();
        value["sprites"] = json!({"front_default": null});
        let record = EntityRecord::load_from_json_str(&value.to_string()).expect("parse");
        assert!(record.sprite_url.is_none());
    }
}
