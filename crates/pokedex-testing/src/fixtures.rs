//! Entity fixtures.

use pokedex_types::EntityDetail;

/// Fluent builder for `EntityDetail`.
pub struct EntityBuilder {
    detail: EntityDetail,
}

impl EntityBuilder {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            detail: EntityDetail {
                id,
                name: name.into(),
                image_url: None,
                categories: Vec::new(),
            },
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.detail.categories.contains(&category) {
            self.detail.categories.push(category);
        }
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.detail.image_url = Some(url.into());
        self
    }

    pub fn build(self) -> EntityDetail {
        self.detail
    }
}

fn entity(id: u32, name: &str, categories: &[&str]) -> EntityDetail {
    let builder = categories
        .iter()
        .fold(EntityBuilder::new(id, name), |b, c| b.category(*c));
    builder
        .image(format!(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
            id
        ))
        .build()
}

/// A dozen well-known entries with their real types.
pub fn starter_entities() -> Vec<EntityDetail> {
    vec![
        entity(1, "bulbasaur", &["grass", "poison"]),
        entity(2, "ivysaur", &["grass", "poison"]),
        entity(3, "venusaur", &["grass", "poison"]),
        entity(4, "charmander", &["fire"]),
        entity(5, "charmeleon", &["fire"]),
        entity(6, "charizard", &["fire", "flying"]),
        entity(7, "squirtle", &["water"]),
        entity(8, "wartortle", &["water"]),
        entity(9, "blastoise", &["water"]),
        entity(10, "caterpie", &["bug"]),
        entity(25, "pikachu", &["electric"]),
        entity(26, "raichu", &["electric"]),
    ]
}

/// `count` synthetic entities named `creature-NNN`.
///
/// Every 5th id is `fire`, other even ids are `water`, the rest are
/// `grass`/`poison`. A roster of 150 therefore holds exactly 30 fire entries.
pub fn synthetic_roster(count: u32) -> Vec<EntityDetail> {
    (1..=count)
        .map(|id| {
            let categories: &[&str] = if id % 5 == 0 {
                &["fire"]
            } else if id % 2 == 0 {
                &["water"]
            } else {
                &["grass", "poison"]
            };
            entity(id, &format!("creature-{:03}", id), categories)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_roster_fire_count() {
        let roster = synthetic_roster(150);
        assert_eq!(roster.len(), 150);
        assert_eq!(roster.iter().filter(|e| e.has_category("fire")).count(), 30);
    }

    #[test]
    fn test_builder_deduplicates_categories() {
        let e = EntityBuilder::new(1, "x").category("fire").category("fire").build();
        assert_eq!(e.categories, vec!["fire"]);
    }
}
