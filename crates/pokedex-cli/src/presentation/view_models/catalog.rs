use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::views::{CatalogPageView, CategoryListView};

/// One card. Raw data only; `#001` and capitalization happen in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCardViewModel {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationViewModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub visible_pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPageViewModel {
    pub search_term: String,
    /// `None` means all categories.
    pub selected_category: Option<String>,
    pub total_entities: usize,
    pub filtered_count: usize,
    pub items: Vec<EntityCardViewModel>,
    pub pagination: PaginationViewModel,
}

impl CatalogPageViewModel {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCountViewModel {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListViewModel {
    pub total_entities: usize,
    pub categories: Vec<CategoryCountViewModel>,
}

impl CreateView for CatalogPageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogPageView::new(self))
    }
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CategoryListView::new(self))
    }
}
