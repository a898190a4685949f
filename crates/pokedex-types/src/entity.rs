use serde::{Deserialize, Serialize};

/// Category label (a Pokémon type such as `fire` or `water`).
pub type CategoryLabel = String;

/// Roster entry: a name plus the URL of its detail record.
///
/// Only lives until the detail record has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub detail_url: String,
}

/// Full detail record, the unit of display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Front sprite URL. PokeAPI sends `null` for a handful of records.
    pub image_url: Option<String>,
    /// Type labels in slot order, unique per entity.
    pub categories: Vec<CategoryLabel>,
}

impl EntityDetail {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Result of a successful load: entities in roster order plus the
/// sorted, de-duplicated category set derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub entities: Vec<EntityDetail>,
    pub categories: Vec<CategoryLabel>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
