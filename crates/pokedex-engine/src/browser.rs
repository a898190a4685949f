use pokedex_types::{Catalog, CategoryLabel, EntityDetail};
use serde::Serialize;

use crate::filter::filter;
use crate::pagination::{MAX_VISIBLE_PAGES, paginate, total_pages, visible_pages};
use crate::state::ViewState;

/// Loaded catalog plus the user's view state.
///
/// The catalog is read-only; only `ViewState` changes, and only through the
/// setters here so page bounds are checked against the current filter.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    state: ViewState,
    page_size: usize,
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot<'a> {
    pub search_term: &'a str,
    pub selected_category: &'a str,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub visible_pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
    pub items: Vec<&'a EntityDetail>,
}

impl PageSnapshot<'_> {
    /// No entity matches the current search/category.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

impl Browser {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
            page_size: page_size.max(1),
        }
    }

    /// Start from a state built before the catalog arrived (e.g. a search
    /// typed while loading). The page is clamped to the new filter.
    pub fn with_state(catalog: Catalog, state: ViewState, page_size: usize) -> Self {
        let mut browser = Self {
            catalog,
            state,
            page_size: page_size.max(1),
        };
        browser.normalize();
        browser
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[CategoryLabel] {
        &self.catalog.categories
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered(&self) -> Vec<&EntityDetail> {
        filter(
            &self.catalog.entities,
            self.state.search_term(),
            self.state.selected_category(),
        )
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn push_search_char(&mut self, c: char) {
        self.state.push_search_char(c);
    }

    pub fn pop_search_char(&mut self) {
        self.state.pop_search_char();
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.state.set_selected_category(category);
    }

    /// Step through `["" (all), categories...]`, wrapping at both ends.
    pub fn cycle_category(&mut self, forward: bool) {
        let options: Vec<&str> = std::iter::once("")
            .chain(self.catalog.categories.iter().map(String::as_str))
            .collect();

        let current = options
            .iter()
            .position(|c| *c == self.state.selected_category())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };

        let category = options[next].to_string();
        self.state.set_selected_category(category);
    }

    /// Move to `page` if it exists; returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page < 1 || page > total || page == self.state.current_page() {
            return false;
        }
        self.state.set_current_page(page);
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page() + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.state.current_page() {
            0 | 1 => false,
            page => self.go_to_page(page - 1),
        }
    }

    /// Re-establish `1 <= current_page <= max(total_pages, 1)`.
    pub fn normalize(&mut self) {
        let total = self.total_pages();
        self.state.clamp(total);
    }

    /// Derive the page to render. The page index is clamped, never shown
    /// out of range.
    pub fn snapshot(&self) -> PageSnapshot<'_> {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let total = total_pages(filtered_count, self.page_size);
        let current_page = self.state.current_page().clamp(1, total.max(1));

        let items = paginate(&filtered, current_page, self.page_size).to_vec();

        PageSnapshot {
            search_term: self.state.search_term(),
            selected_category: self.state.selected_category(),
            current_page,
            total_pages: total,
            page_size: self.page_size,
            filtered_count,
            visible_pages: visible_pages(current_page, total, MAX_VISIBLE_PAGES),
            has_prev: current_page > 1,
            has_next: current_page < total,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PAGE_SIZE;

    fn entity(id: u32, name: &str, categories: &[&str]) -> EntityDetail {
        EntityDetail {
            id,
            name: name.to_string(),
            image_url: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn catalog(count: u32) -> Catalog {
        let entities: Vec<EntityDetail> = (1..=count)
            .map(|id| {
                let category = if id % 3 == 0 { "fire" } else { "water" };
                entity(id, &format!("mon-{:03}", id), &[category])
            })
            .collect();
        Catalog {
            entities,
            categories: vec!["fire".to_string(), "water".to_string()],
        }
    }

    #[test]
    fn test_first_page_snapshot() {
        let browser = Browser::new(catalog(40), PAGE_SIZE);
        let page = browser.snapshot();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.filtered_count, 40);
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.visible_pages, vec![1, 2, 3, 4]);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_navigation_stops_at_boundaries() {
        let mut browser = Browser::new(catalog(30), PAGE_SIZE);

        assert!(!browser.prev_page());
        assert!(browser.next_page());
        assert!(browser.next_page());
        assert!(!browser.next_page());
        assert_eq!(browser.state().current_page(), 3);

        let page = browser.snapshot();
        assert_eq!(page.items.len(), 6);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range() {
        let mut browser = Browser::new(catalog(30), PAGE_SIZE);

        assert!(!browser.go_to_page(0));
        assert!(!browser.go_to_page(4));
        assert!(browser.go_to_page(3));
        assert_eq!(browser.state().current_page(), 3);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let mut browser = Browser::new(catalog(40), PAGE_SIZE);
        browser.go_to_page(4);

        browser.set_selected_category("fire");
        assert_eq!(browser.state().current_page(), 1);

        browser.go_to_page(2);
        browser.push_search_char('0');
        assert_eq!(browser.state().current_page(), 1);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut browser = Browser::new(catalog(3), PAGE_SIZE);

        browser.cycle_category(true);
        assert_eq!(browser.state().selected_category(), "fire");
        browser.cycle_category(true);
        assert_eq!(browser.state().selected_category(), "water");
        browser.cycle_category(true);
        assert_eq!(browser.state().selected_category(), "");
        browser.cycle_category(false);
        assert_eq!(browser.state().selected_category(), "water");
    }

    #[test]
    fn test_cycle_category_with_no_categories() {
        let mut browser = Browser::new(Catalog::default(), PAGE_SIZE);
        browser.cycle_category(true);
        assert_eq!(browser.state().selected_category(), "");
    }

    #[test]
    fn test_empty_catalog_snapshot() {
        let browser = Browser::new(Catalog::default(), PAGE_SIZE);
        let page = browser.snapshot();

        assert!(page.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.visible_pages.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_normalize_clamps_stale_page() {
        let mut browser = Browser::new(catalog(40), PAGE_SIZE);
        browser.go_to_page(4);

        // Bypass the resetting setters to simulate a stale page index
        browser.state.search_term = "mon-00".to_string();
        assert_eq!(browser.snapshot().current_page, 1);

        browser.normalize();
        assert_eq!(browser.state().current_page(), 1);
    }

    #[test]
    fn test_with_state_keeps_search_and_clamps_page() {
        let mut state = ViewState::new();
        state.set_search_term("mon-01");
        state.set_current_page(6);

        let browser = Browser::with_state(catalog(40), state, PAGE_SIZE);
        assert_eq!(browser.state().search_term(), "mon-01");
        assert_eq!(browser.state().current_page(), 1);
        assert_eq!(browser.snapshot().filtered_count, 10);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let browser = Browser::new(catalog(5), 0);
        assert_eq!(browser.page_size(), 1);
        assert_eq!(browser.total_pages(), 5);
    }
}
