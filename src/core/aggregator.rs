use crate::data::entity::TypeRef;
use crate::data::relations::DamageRelations;
use crate::error::LookupError;
use crate::tools::pokeapi::CreatureService;
use futures::future::try_join_all;

/// Fetches the matchups of every type concurrently and merges them by type name.
/// Any single failure fails the whole call; no partial result is returned.
pub async fn aggregate<S>(service: &S, types: &[TypeRef]) -> Result<DamageRelations, LookupError>
where
    S: CreatureService + ?Sized,
{
    let fetched = try_join_all(types.iter().map(|type_ref| async move {
        let relations = service.fetch_type_relations(type_ref).await?;
        Ok::<_, LookupError>((type_ref.name.clone(), relations))
    }))
    .await?;

    Ok(fetched.into_iter().collect())
}
