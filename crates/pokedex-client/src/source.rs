use async_trait::async_trait;
use pokedex_types::{EntityDetail, EntitySummary};

use crate::Result;

/// Where roster and detail records come from.
///
/// `PokeApiClient` talks HTTP; tests plug in in-memory sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the first `limit` roster entries.
    async fn fetch_roster(&self, limit: usize) -> Result<Vec<EntitySummary>>;

    /// Fetch the detail record a roster entry points to.
    async fn fetch_detail(&self, summary: &EntitySummary) -> Result<EntityDetail>;
}
