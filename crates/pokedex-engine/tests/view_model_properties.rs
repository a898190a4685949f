//! View-model properties over generated rosters.

use pokedex_engine::{Browser, PAGE_SIZE, ViewState, filter, total_pages, visible_pages};
use pokedex_testing::fixtures;
use pokedex_types::{Catalog, EntityDetail};

fn roster_catalog() -> Catalog {
    let entities = fixtures::synthetic_roster(150);
    let categories = vec![
        "fire".to_string(),
        "grass".to_string(),
        "poison".to_string(),
        "water".to_string(),
    ];
    Catalog {
        entities,
        categories,
    }
}

const SEARCH_TERMS: &[&str] = &["", "c", "CREATURE", "-0", "-1", "05", "150", "zzz", "Ature-09"];
const CATEGORIES: &[&str] = &["", "fire", "water", "grass", "poison", "ghost"];

#[test]
fn test_search_only_filter_is_lowercase_substring() {
    let catalog = roster_catalog();

    for term in SEARCH_TERMS {
        let filtered = filter(&catalog.entities, term, "");
        let expected: Vec<&EntityDetail> = catalog
            .entities
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        assert_eq!(filtered, expected, "term={term}");
    }
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = roster_catalog();

    for term in SEARCH_TERMS {
        for category in CATEGORIES {
            let once = filter(&catalog.entities, term, category);
            let twice = filter(once.iter().copied(), term, category);
            assert_eq!(once, twice, "term={term} category={category}");
        }
    }
}

#[test]
fn test_category_filter_partitions_roster() {
    let catalog = roster_catalog();

    for category in CATEGORIES.iter().filter(|c| !c.is_empty()) {
        let kept = filter(&catalog.entities, "", category);
        assert!(kept.iter().all(|e| e.has_category(category)));

        let excluded = catalog
            .entities
            .iter()
            .filter(|e| !kept.iter().any(|k| k.id == e.id));
        for e in excluded {
            assert!(!e.has_category(category), "{} should have been kept", e.name);
        }
    }
}

#[test]
fn test_filter_preserves_input_order() {
    let catalog = roster_catalog();
    let ids: Vec<u32> = filter(&catalog.entities, "", "water")
        .iter()
        .map(|e| e.id)
        .collect();

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_total_pages_bounds() {
    assert_eq!(total_pages(0, PAGE_SIZE), 0);
    for n in 1..=200usize {
        let tp = total_pages(n, PAGE_SIZE);
        assert!((tp - 1) * PAGE_SIZE < n && n <= tp * PAGE_SIZE, "n={n} tp={tp}");
    }
}

#[test]
fn test_filter_changes_always_reset_page() {
    let mut state = ViewState::new();
    for prior in [1usize, 2, 5, 13] {
        state.set_current_page(prior);
        state.set_search_term(format!("term-{prior}"));
        assert_eq!(state.current_page(), 1);

        state.set_current_page(prior);
        state.set_selected_category("fire");
        assert_eq!(state.current_page(), 1);
    }
}

#[test]
fn test_page_window_examples() {
    assert_eq!(visible_pages(1, 20, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible_pages(10, 20, 5), vec![8, 9, 10, 11, 12]);
    assert_eq!(visible_pages(20, 20, 5), vec![16, 17, 18, 19, 20]);
}

#[test]
fn test_fire_category_over_150_roster() {
    let mut browser = Browser::new(roster_catalog(), PAGE_SIZE);
    browser.set_selected_category("fire");

    let page = browser.snapshot();
    assert_eq!(page.filtered_count, 30);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 1);

    let all_fire: Vec<u32> = roster_catalog()
        .entities
        .iter()
        .filter(|e| e.has_category("fire"))
        .map(|e| e.id)
        .collect();
    let shown: Vec<u32> = page.items.iter().map(|e| e.id).collect();
    assert_eq!(shown, all_fire[..12].to_vec());
    assert_eq!(shown[0], 5);
    assert_eq!(shown[11], 60);
}

#[test]
fn test_no_match_is_empty_for_every_category() {
    let mut browser = Browser::new(roster_catalog(), PAGE_SIZE);
    browser.set_search_term("missingno");

    for category in CATEGORIES {
        browser.set_selected_category(*category);
        let page = browser.snapshot();
        assert!(page.is_empty(), "category={category}");
        assert!(page.items.is_empty());
    }
}

#[test]
fn test_snapshot_page_always_in_range() {
    let mut browser = Browser::new(roster_catalog(), PAGE_SIZE);

    for term in SEARCH_TERMS {
        for category in CATEGORIES {
            browser.set_search_term(*term);
            browser.set_selected_category(*category);
            while browser.next_page() {}

            let page = browser.snapshot();
            assert!(page.current_page >= 1);
            assert!(page.current_page <= page.total_pages.max(1));
            assert!(page.items.len() <= PAGE_SIZE);
        }
    }
}
