pub mod pokeapi;

pub use pokeapi::{CreatureService, PokeApiClient, POKEAPI_URL};
