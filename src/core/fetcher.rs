use crate::data::entity::EntityRecord;
use crate::error::LookupError;
use crate::tools::pokeapi::CreatureService;

/// Looks up one creature by name. The name goes to the service as given.
pub async fn fetch_entity<S>(service: &S, name: &str) -> Result<EntityRecord, LookupError>
where
    S: CreatureService + ?Sized,
{
    let record = service.fetch_entity(name).await?;
    tracing::debug!(requested = name, id = record.id, "entity fetched");
    Ok(record)
}
