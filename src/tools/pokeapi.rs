//! PokeAPI client
//!
//! This module provides the read-only client for the public PokeAPI service
//! and the `CreatureService` trait the lookup flow is written against.

use crate::config::Config;
use crate::data::candidates::{CandidateEntry, CandidateIndex};
use crate::data::entity::{EntityRecord, EntityWire, TypeRef};
use crate::data::relations::{TypeDocumentWire, TypeRelations};
use crate::error::LookupError;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// The three read-only endpoints the lookup flow needs.
#[async_trait]
pub trait CreatureService: Send + Sync {
    /// `GET /pokemon?limit=<N>`
    async fn list_candidates(&self, limit: usize) -> Result<Vec<CandidateEntry>, LookupError>;

    /// `GET /pokemon/<name>`
    async fn fetch_entity(&self, name: &str) -> Result<EntityRecord, LookupError>;

    /// `GET <type.url>`
    async fn fetch_type_relations(&self, type_ref: &TypeRef) -> Result<TypeRelations, LookupError>;
}

/// PokeAPI client
pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    /// Create a client against `base_url` (e.g. "https://pokeapi.co/api/v2")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/pokemon/<name>`, with the name as one percent-encoded segment.
    pub fn entity_url(&self, name: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            LookupError::Service(format!("invalid base url '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Service(format!("base url '{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push("pokemon")
            // The service only resolves lowercase slugs.
            .push(&name.trim().to_lowercase());
        Ok(url)
    }

    pub fn candidates_url(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    async fn get_text(&self, url: &str) -> Result<(StatusCode, String), LookupError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), LookupError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LookupError::Service(format!(
            "GET {} failed with status {}",
            url, status
        )))
    }
}

fn parse_candidates(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Vec<CandidateEntry>, LookupError> {
    check_status(url, status)?;
    let index = CandidateIndex::load_from_json_str(body)?;
    Ok(index.entries().to_vec())
}

/// 404 means the service has no creature by that name.
fn parse_entity(
    name: &str,
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<EntityRecord, LookupError> {
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound(name.to_string()));
    }
    check_status(url, status)?;
    let wire: EntityWire = serde_json::from_str(body)?;
    EntityRecord::try_from(wire)
}

fn parse_type_relations(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<TypeRelations, LookupError> {
    check_status(url, status)?;
    let wire: TypeDocumentWire = serde_json::from_str(body)?;
    Ok(TypeRelations::from(wire))
}

#[async_trait]
impl CreatureService for PokeApiClient {
    async fn list_candidates(&self, limit: usize) -> Result<Vec<CandidateEntry>, LookupError> {
        let url = self.candidates_url(limit);
        let (status, body) = self.get_text(&url).await?;
        parse_candidates(&url, status, &body)
    }

    async fn fetch_entity(&self, name: &str) -> Result<EntityRecord, LookupError> {
        let url = self.entity_url(name)?;
        let (status, body) = self.get_text(url.as_str()).await?;
        parse_entity(name, url.as_str(), status, &body)
    }

    async fn fetch_type_relations(&self, type_ref: &TypeRef) -> Result<TypeRelations, LookupError> {
        let url = &type_ref.relations_url;
        let (status, body) = self.get_text(url).await?;
        parse_type_relations(url, status, &body)
    }
}
