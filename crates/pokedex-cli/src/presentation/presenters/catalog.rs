use pokedex_engine::{Browser, PageSnapshot};
use pokedex_types::EntityDetail;

use crate::presentation::formatters::shell_quote;
use crate::presentation::view_models::{
    CatalogPageViewModel, CategoryCountViewModel, CategoryListViewModel, EntityCardViewModel,
    Guidance, PaginationViewModel, StatusBadge, Summarize,
};

fn present_card(entity: &EntityDetail) -> EntityCardViewModel {
    EntityCardViewModel {
        id: entity.id,
        name: entity.name.clone(),
        image_url: entity.image_url.clone(),
        categories: entity.categories.clone(),
    }
}

pub fn present_catalog_page(page: &PageSnapshot<'_>, total_entities: usize) -> CatalogPageViewModel {
    let selected_category = if page.selected_category.is_empty() {
        None
    } else {
        Some(page.selected_category.to_string())
    };

    CatalogPageViewModel {
        search_term: page.search_term.to_string(),
        selected_category,
        total_entities,
        filtered_count: page.filtered_count,
        items: page.items.iter().copied().map(present_card).collect(),
        pagination: PaginationViewModel {
            current_page: page.current_page,
            total_pages: page.total_pages,
            page_size: page.page_size,
            visible_pages: page.visible_pages.clone(),
            has_prev: page.has_prev,
            has_next: page.has_next,
        },
    }
}

/// Per-category counts over the whole catalog, in category order.
pub fn present_category_list(browser: &Browser) -> CategoryListViewModel {
    let entities = &browser.catalog().entities;
    let categories = browser
        .categories()
        .iter()
        .map(|name| CategoryCountViewModel {
            name: name.clone(),
            count: entities.iter().filter(|e| e.has_category(name)).count(),
        })
        .collect();

    CategoryListViewModel {
        total_entities: entities.len(),
        categories,
    }
}

/// Next steps for `pokedex list`.
pub fn catalog_suggestions(page: &CatalogPageViewModel) -> Vec<Guidance> {
    let mut tips = Vec::new();

    if page.is_empty() {
        if !page.search_term.is_empty() {
            tips.push(Guidance::new("Try a shorter search").with_command("pokedex list"));
        }
        if page.selected_category.is_some() {
            tips.push(
                Guidance::new("See which types are available").with_command("pokedex categories"),
            );
        }
        return tips;
    }

    if page.pagination.has_next {
        let mut command = String::from("pokedex list");
        if !page.search_term.is_empty() {
            command.push_str(&format!(" --search {}", shell_quote(&page.search_term)));
        }
        if let Some(category) = &page.selected_category {
            command.push_str(&format!(" --category {}", shell_quote(category)));
        }
        command.push_str(&format!(" --page {}", page.pagination.current_page + 1));
        tips.push(Guidance::new("Next page").with_command(command));
    }

    tips
}

impl Summarize for CatalogPageViewModel {
    fn badge(&self) -> Option<StatusBadge> {
        Some(if self.is_empty() {
            StatusBadge::warning("No Pokémon found")
        } else {
            StatusBadge::success(format!("{} Pokémon match", self.filtered_count))
        })
    }

    fn suggestions(&self) -> Vec<Guidance> {
        catalog_suggestions(self)
    }
}

impl Summarize for CategoryListViewModel {
    fn badge(&self) -> Option<StatusBadge> {
        Some(StatusBadge::info(format!("{} types", self.categories.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_engine::PAGE_SIZE;
    use pokedex_testing::fixtures;
    use pokedex_types::Catalog;

    fn browser() -> Browser {
        let entities = fixtures::starter_entities();
        let categories = pokedex_client::derive_categories(&entities);
        Browser::new(
            Catalog {
                entities,
                categories,
            },
            PAGE_SIZE,
        )
    }

    #[test]
    fn test_present_page_copies_raw_fields() {
        let mut browser = browser();
        browser.set_search_term("chariz");

        let vm = present_catalog_page(&browser.snapshot(), 12);
        assert_eq!(vm.filtered_count, 1);
        assert_eq!(vm.selected_category, None);
        assert_eq!(vm.items[0].id, 6);
        assert_eq!(vm.items[0].name, "charizard");
        assert_eq!(vm.items[0].categories, vec!["fire", "flying"]);
        assert_eq!(vm.pagination.total_pages, 1);
    }

    #[test]
    fn test_category_counts() {
        let vm = present_category_list(&browser());
        let fire = vm.categories.iter().find(|c| c.name == "fire").unwrap();
        assert_eq!(fire.count, 3);
        assert_eq!(vm.total_entities, 12);
    }

    #[test]
    fn test_suggest_next_page() {
        let mut browser = Browser::new(browser().catalog().clone(), 5);
        browser.set_selected_category("grass");

        let vm = present_catalog_page(&browser.snapshot(), 12);
        let tips = catalog_suggestions(&vm);
        assert!(tips.is_empty());

        browser.set_selected_category("");
        let vm = present_catalog_page(&browser.snapshot(), 12);
        let tips = catalog_suggestions(&vm);
        assert_eq!(tips[0].command.as_deref(), Some("pokedex list --page 2"));
    }

    #[test]
    fn test_page_badge_follows_match_count() {
        let mut browser = browser();
        browser.set_selected_category("fire");
        let vm = present_catalog_page(&browser.snapshot(), 12);
        assert_eq!(vm.badge(), Some(StatusBadge::success("3 Pokémon match")));

        browser.set_search_term("missingno");
        let vm = present_catalog_page(&browser.snapshot(), 12);
        assert_eq!(vm.badge(), Some(StatusBadge::warning("No Pokémon found")));
    }

    #[test]
    fn test_suggestions_for_empty_page() {
        let mut browser = browser();
        browser.set_search_term("missingno");
        browser.set_selected_category("fire");

        let vm = present_catalog_page(&browser.snapshot(), 12);
        assert_eq!(catalog_suggestions(&vm).len(), 2);
    }

    #[test]
    fn test_next_page_command_quotes_search_with_spaces() {
        let mut browser = Browser::new(browser().catalog().clone(), 1);
        browser.set_search_term("r");

        let mut vm = present_catalog_page(&browser.snapshot(), 12);
        assert!(vm.pagination.has_next);
        vm.search_term = "mr mime".to_string();

        let tips = catalog_suggestions(&vm);
        assert_eq!(
            tips[0].command.as_deref(),
            Some("pokedex list --search 'mr mime' --page 2")
        );
    }
}
