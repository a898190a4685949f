use pokedex_types::EntityDetail;

/// True iff `search_term` is a case-insensitive substring of the name and
/// the entity carries `selected_category` (an empty category means "all").
pub fn matches(entity: &EntityDetail, search_term: &str, selected_category: &str) -> bool {
    let matches_search = entity
        .name
        .to_lowercase()
        .contains(&search_term.to_lowercase());
    let matches_category = selected_category.is_empty() || entity.has_category(selected_category);

    matches_search && matches_category
}

/// Entities matching both criteria, in input order.
pub fn filter<'a, I>(entities: I, search_term: &str, selected_category: &str) -> Vec<&'a EntityDetail>
where
    I: IntoIterator<Item = &'a EntityDetail>,
{
    entities
        .into_iter()
        .filter(|e| matches(e, search_term, selected_category))
        .collect()
}
