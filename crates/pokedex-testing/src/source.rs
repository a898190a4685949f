//! In-memory catalog source.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pokedex_client::{CatalogSource, FetchError, Result};
use pokedex_types::{EntityDetail, EntitySummary};

/// Serves a fixed entity list, optionally failing the roster or
/// selected detail records.
pub struct MemorySource {
    entities: Vec<EntityDetail>,
    fail_roster: bool,
    failing_ids: HashSet<u32>,
    detail_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new(entities: Vec<EntityDetail>) -> Self {
        Self {
            entities,
            fail_roster: false,
            failing_ids: HashSet::new(),
            detail_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_roster(mut self) -> Self {
        self.fail_roster = true;
        self
    }

    pub fn failing_detail(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Number of detail requests received so far.
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn detail_url(id: u32) -> String {
        format!("memory://pokemon/{}", id)
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch_roster(&self, limit: usize) -> Result<Vec<EntitySummary>> {
        if self.fail_roster {
            return Err(FetchError::new("memory://pokemon", "roster unavailable"));
        }

        Ok(self
            .entities
            .iter()
            .take(limit)
            .map(|e| EntitySummary {
                name: e.name.clone(),
                detail_url: Self::detail_url(e.id),
            })
            .collect())
    }

    async fn fetch_detail(&self, summary: &EntitySummary) -> Result<EntityDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        let entity = self
            .entities
            .iter()
            .find(|e| Self::detail_url(e.id) == summary.detail_url)
            .ok_or_else(|| FetchError::new(&summary.detail_url, "HTTP status 404 Not Found"))?;

        if self.failing_ids.contains(&entity.id) {
            return Err(FetchError::new(
                &summary.detail_url,
                "HTTP status 500 Internal Server Error",
            ));
        }

        Ok(entity.clone())
    }
}
