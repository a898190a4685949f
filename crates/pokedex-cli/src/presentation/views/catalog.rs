use std::fmt;

use crate::presentation::formatters::{capitalize, format_id};
use crate::presentation::view_models::{CatalogPageViewModel, CategoryListViewModel};

// --------------------------------------------------------
// Catalog Page View
// --------------------------------------------------------

pub struct CatalogPageView<'a> {
    data: &'a CatalogPageViewModel,
}

impl<'a> CatalogPageView<'a> {
    pub fn new(data: &'a CatalogPageViewModel) -> Self {
        Self { data }
    }

    fn write_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut filters = Vec::new();
        if !self.data.search_term.is_empty() {
            filters.push(format!("search \"{}\"", self.data.search_term));
        }
        if let Some(category) = &self.data.selected_category {
            filters.push(format!("type {}", category));
        }
        if !filters.is_empty() {
            writeln!(f, "Filters: {}", filters.join(", "))?;
        }
        Ok(())
    }

    fn write_pages(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pagination = &self.data.pagination;
        let pages: Vec<String> = pagination
            .visible_pages
            .iter()
            .map(|&p| {
                if p == pagination.current_page {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();

        let prev = if pagination.has_prev { "‹ prev" } else { "      " };
        let next = if pagination.has_next { "next ›" } else { "" };
        writeln!(f, "{}  {}  {}", prev, pages.join(" "), next)
    }
}

impl<'a> fmt::Display for CatalogPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_filters(f)?;

        if self.data.is_empty() {
            writeln!(f, "No Pokémon found.")?;
            return Ok(());
        }

        let pagination = &self.data.pagination;
        writeln!(
            f,
            "Page {} of {} ({} of {} Pokémon)",
            pagination.current_page,
            pagination.total_pages,
            self.data.filtered_count,
            self.data.total_entities
        )?;
        writeln!(f)?;
        writeln!(f, "{:<6} {:<14} TYPES", "ID", "NAME")?;
        writeln!(f, "{}", "-".repeat(40))?;

        for item in &self.data.items {
            writeln!(
                f,
                "{:<6} {:<14} {}",
                format_id(item.id),
                capitalize(&item.name),
                item.categories.join(", ")
            )?;
        }

        writeln!(f)?;
        self.write_pages(f)
    }
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.categories.is_empty() {
            writeln!(f, "No types found.")?;
            return Ok(());
        }

        writeln!(f, "{:<12} COUNT", "TYPE")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for category in &self.data.categories {
            writeln!(f, "{:<12} {}", category.name, category.count)?;
        }
        writeln!(f)?;
        writeln!(f, "{} Pokémon loaded", self.data.total_entities)
    }
}
