mod common;

use common::{creature, ScriptedService};
use pokedex_rust::{aggregate, fetch_entity, CandidateIndex, LookupError};

#[tokio::test]
async fn fetch_returns_entity_record() {
    let service = ScriptedService::new().with_entity(creature(25, "pikachu", &["electric"]));
    let record = fetch_entity(&service, "Pikachu").await.expect("fetch pikachu");
    assert_eq!(record.id, 25);
    assert_eq!(service.entity_requests(), vec!["Pikachu"]);
}

#[tokio::test]
async fn fetch_unknown_name_is_not_found() {
    let service = ScriptedService::new();
    let err = fetch_entity(&service, "Missingno").await.expect_err("should fail");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn aggregate_keeps_double_damage_relations() {
    let service = ScriptedService::new().with_type("electric", &["water", "flying"], &["ground"]);
    let pikachu = creature(25, "pikachu", &["electric"]);

    let relations = aggregate(&service, &pikachu.types).await.expect("aggregate");

    let electric = relations.get("electric").expect("electric relations");
    assert!(electric.strong_against.contains(&"water".to_string()));
    assert!(electric.strong_against.contains(&"flying".to_string()));
    assert_eq!(electric.weak_against, vec!["ground"]);
    assert_eq!(relations.len(), 1);
}

#[tokio::test]
async fn aggregate_merges_every_type() {
    let service = ScriptedService::new()
        .with_type("fire", &["grass", "ice", "bug", "steel"], &["water", "ground", "rock"])
        .with_type("flying", &["fighting", "bug", "grass"], &["electric", "ice", "rock"]);
    let charizard = creature(6, "charizard", &["fire", "flying"]);

    let relations = aggregate(&service, &charizard.types).await.expect("aggregate");

    let mut keys: Vec<_> = relations.type_names().collect();
    keys.sort();
    assert_eq!(keys, vec!["fire", "flying"]);
    assert_eq!(relations.get("flying").map(|r| r.weak_against.len()), Some(3));
    assert_eq!(service.type_requests().len(), 2);
}

#[tokio::test]
async fn aggregate_fails_when_any_type_fails() {
    let service = ScriptedService::new()
        .with_type("fire", &["grass"], &["water"])
        .failing_type("flying");
    let charizard = creature(6, "charizard", &["fire", "flying"]);

    let err = aggregate(&service, &charizard.types).await.expect_err("should fail");
    assert!(matches!(err, LookupError::Service(_)));
}

#[tokio::test]
async fn aggregate_requests_run_concurrently() {
    // Both requests must be in flight at once: "fire" is only released after
    // "flying" has been requested.
    let service = ScriptedService::new()
        .with_type("fire", &["grass"], &[])
        .with_type("flying", &["bug"], &[])
        .gated("type:fire");
    let charizard = creature(6, "charizard", &["fire", "flying"]);

    let (relations, _) = tokio::join!(aggregate(&service, &charizard.types), async {
        while !service.type_requests().contains(&"flying".to_string()) {
            tokio::task::yield_now().await;
        }
        service.release("type:fire");
    });

    assert_eq!(relations.expect("aggregate").len(), 2);
}

#[tokio::test]
async fn candidate_index_loads_in_service_order() {
    let service = ScriptedService::new().with_candidates(&["bulbasaur", "ivysaur", "venusaur"]);
    let index = CandidateIndex::load(&service, 2).await.expect("load");
    let names: Vec<_> = index.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
}

#[tokio::test]
async fn candidate_index_propagates_network_error() {
    let service = ScriptedService::new();
    let err = CandidateIndex::load(&service, 10).await.expect_err("should fail");
    assert!(matches!(err, LookupError::Network(_)));
}
