use async_trait::async_trait;
use pokedex_types::{Catalog, DetailResponse, EntityDetail, EntitySummary, RosterResponse};
use serde::de::DeserializeOwned;

use crate::{CatalogSource, ClientConfig, FetchError, Result, load_catalog};

/// reqwest-backed PokeAPI client.
///
/// No timeout and no retry: a request either settles or the load fails.
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PokeApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::new(&config.api_base_url, e))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Load the configured roster and every detail record.
    pub async fn load(&self) -> Result<Catalog> {
        load_catalog(self, self.config.roster_limit).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        response
            .error_for_status()
            .map_err(|e| FetchError::new(url, e))?
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(url, format!("invalid response body: {}", e)))
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_roster(&self, limit: usize) -> Result<Vec<EntitySummary>> {
        let url = self.config.clone().with_roster_limit(limit).roster_url();
        let roster: RosterResponse = self.get_json(&url).await?;
        Ok(roster.results.into_iter().map(EntitySummary::from).collect())
    }

    async fn fetch_detail(&self, summary: &EntitySummary) -> Result<EntityDetail> {
        let raw: DetailResponse = self.get_json(&summary.detail_url).await?;
        Ok(EntityDetail::from(raw))
    }
}
