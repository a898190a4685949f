//! PokeAPI response schema.
//!
//! Only the fields the catalog needs are modelled; everything else in the
//! (large) detail payload is ignored by serde.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityDetail, EntitySummary};

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub results: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub url: String,
}

/// `GET /pokemon/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    /// PokeAPI ids start at 1; a zero id fails to decode.
    pub id: NonZeroU32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<RosterEntry> for EntitySummary {
    fn from(entry: RosterEntry) -> Self {
        Self {
            name: entry.name,
            detail_url: entry.url,
        }
    }
}

impl From<DetailResponse> for EntityDetail {
    fn from(mut raw: DetailResponse) -> Self {
        // Stable sort keeps payload order for records without slot numbers
        raw.types.sort_by_key(|t| t.slot);

        let mut categories: Vec<String> = Vec::with_capacity(raw.types.len());
        for slot in raw.types {
            if !categories.contains(&slot.kind.name) {
                categories.push(slot.kind.name);
            }
        }

        Self {
            id: raw.id.get(),
            name: raw.name,
            image_url: raw.sprites.front_default,
            categories,
        }
    }
}
