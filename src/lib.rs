pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod tools;

pub use config::Config;
pub use crate::core::{
    aggregator::aggregate,
    controller::{InputState, SearchOutcome, ViewState, ViewStateController},
    fetcher::fetch_entity,
    filter::{filter, filter_names},
    render::{render, render_card, EntityCard, PageView, Row},
    suggestions::{SuggestionPanel, Visibility},
    utils::capitalize_first_letter,
};
pub use data::{
    candidates::{CandidateEntry, CandidateIndex},
    entity::{AbilityRef, EntityRecord, StatEntry, TypeRef},
    relations::{DamageRelations, TypeRelations},
};
pub use error::LookupError;
pub use tools::pokeapi::{CreatureService, PokeApiClient};
