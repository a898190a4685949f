use std::collections::BTreeSet;
use std::time::Instant;

use futures::future::try_join_all;
use pokedex_types::{Catalog, CategoryLabel, EntityDetail};

use crate::{CatalogSource, Result};

/// Load the whole catalog from `source`.
///
/// Every detail request is issued at once and joined; the first failure
/// wins and the remaining in-flight requests are dropped. There is no
/// partial result and no retry.
pub async fn load_catalog(source: &dyn CatalogSource, limit: usize) -> Result<Catalog> {
    let started = Instant::now();

    let roster = source.fetch_roster(limit).await.inspect_err(|e| {
        tracing::warn!(url = e.url(), reason = e.reason(), "roster fetch failed");
    })?;
    tracing::info!(entries = roster.len(), "roster fetched");

    let entities = try_join_all(roster.iter().map(|summary| async move {
        tracing::debug!(name = %summary.name, url = %summary.detail_url, "fetching detail");
        source.fetch_detail(summary).await
    }))
    .await
    .inspect_err(|e| {
        tracing::warn!(url = e.url(), reason = e.reason(), "detail fetch failed");
    })?;

    let categories = derive_categories(&entities);

    tracing::info!(
        entities = entities.len(),
        categories = categories.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "catalog loaded"
    );

    Ok(Catalog {
        entities,
        categories,
    })
}

/// Union of all entity categories, de-duplicated and sorted ascending.
pub fn derive_categories(entities: &[EntityDetail]) -> Vec<CategoryLabel> {
    entities
        .iter()
        .flat_map(|e| e.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
