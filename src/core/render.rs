use crate::core::controller::ViewState;
use crate::core::utils::{capitalize_first_letter, format_tenths, join_capitalized};
use crate::data::entity::EntityRecord;
use crate::data::relations::{DamageRelations, TypeRelations};
use std::fmt;

pub const TITLE: &str = "Pokédex";
pub const UNKNOWN: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: String, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityCard {
    pub heading: String,
    pub number: String,
    pub sprite_url: Option<String>,
    pub types: String,
    pub height: String,
    pub weight: String,
    pub abilities: String,
    pub stats: Vec<Row>,
    pub strong_against: Vec<Row>,
    pub weak_against: Vec<Row>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub input_text: String,
    /// Empty unless the dropdown should be drawn.
    pub suggestions: Vec<String>,
    pub card: Option<EntityCard>,
}

pub fn render(state: &ViewState) -> PageView {
    let suggestions = if state.suggestions_shown() {
        state
            .suggestions()
            .into_iter()
            .map(|entry| capitalize_first_letter(&entry.name))
            .collect()
    } else {
        Vec::new()
    };

    PageView {
        title: TITLE.to_string(),
        input_text: state.input.text.clone(),
        suggestions,
        card: state
            .entity
            .as_ref()
            .map(|entity| render_card(entity, &state.relations)),
    }
}

pub fn render_card(entity: &EntityRecord, relations: &DamageRelations) -> EntityCard {
    EntityCard {
        heading: capitalize_first_letter(&entity.name),
        number: format!("#{}", entity.id),
        sprite_url: entity.sprite_url.clone(),
        types: join_capitalized(entity.type_names()),
        height: format!("{} m", format_tenths(entity.height)),
        weight: format!("{} kg", format_tenths(entity.weight)),
        abilities: join_capitalized(entity.abilities.iter().map(|a| a.name.as_str())),
        stats: entity
            .stats
            .iter()
            .map(|s| Row::new(capitalize_first_letter(&s.name), s.value.to_string()))
            .collect(),
        strong_against: matchup_rows(entity, relations, |r| &r.strong_against),
        weak_against: matchup_rows(entity, relations, |r| &r.weak_against),
    }
}

fn matchup_rows<F>(entity: &EntityRecord, relations: &DamageRelations, pick: F) -> Vec<Row>
where
    F: Fn(&TypeRelations) -> &Vec<String>,
{
    entity
        .type_names()
        .map(|type_name| {
            let value = relations
                .get(type_name)
                .map(|r| join_capitalized(pick(r).iter().map(String::as_str)))
                .filter(|joined| !joined.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string());
            Row::new(capitalize_first_letter(type_name), value)
        })
        .collect()
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[Row]) -> fmt::Result {
    for row in rows {
        writeln!(f, "    {:<18}{}", row.label, row.value)?;
    }
    Ok(())
}

impl fmt::Display for EntityCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.heading, self.number)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        if let Some(sprite) = &self.sprite_url {
            writeln!(f, "  Sprite:    {}", sprite)?;
        }
        writeln!(f, "  Type:      {}", self.types)?;
        writeln!(f, "  Height:    {}", self.height)?;
        writeln!(f, "  Weight:    {}", self.weight)?;
        writeln!(f, "  Abilities: {}", self.abilities)?;
        writeln!(f, "  Stats:")?;
        write_rows(f, &self.stats)?;
        writeln!(f, "  Strong Against:")?;
        write_rows(f, &self.strong_against)?;
        writeln!(f, "  Weak Against:")?;
        write_rows(f, &self.weak_against)
    }
}
