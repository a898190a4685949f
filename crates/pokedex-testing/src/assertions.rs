//! Assertions over `pokedex list --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Names of the cards on the rendered page, in order.
pub fn page_names(json: &Value) -> Result<Vec<String>> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["name"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Item {} missing name", i))
        })
        .collect()
}

pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let actual = page_names(json)?.len();
    if actual != expected {
        anyhow::bail!("Expected {} items on page, got {}", expected, actual);
    }
    Ok(())
}

/// Check `content.pagination.current_page` / `total_pages`.
pub fn assert_page(json: &Value, current: u64, total: u64) -> Result<()> {
    let pagination = &json["content"]["pagination"];
    let actual_current = pagination["current_page"]
        .as_u64()
        .context("Expected 'content.pagination.current_page'")?;
    let actual_total = pagination["total_pages"]
        .as_u64()
        .context("Expected 'content.pagination.total_pages'")?;

    if (actual_current, actual_total) != (current, total) {
        anyhow::bail!(
            "Expected page {} of {}, got page {} of {}",
            current,
            total,
            actual_current,
            actual_total
        );
    }
    Ok(())
}

/// Every card on the page carries `category`.
pub fn assert_all_items_in_category(json: &Value, category: &str) -> Result<()> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    for (i, item) in items.iter().enumerate() {
        let categories = item["categories"]
            .as_array()
            .with_context(|| format!("Item {} missing categories", i))?;
        if !categories.iter().any(|c| c.as_str() == Some(category)) {
            anyhow::bail!("Item {} is not in category '{}'", i, category);
        }
    }
    Ok(())
}
