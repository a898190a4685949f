pub mod catalog;
pub mod common;
pub mod config;
pub mod result;
pub mod screen;

pub use catalog::{
    CatalogPageViewModel, CategoryCountViewModel, CategoryListViewModel, EntityCardViewModel,
    PaginationViewModel,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use result::{CommandResultViewModel, Summarize};
pub use screen::{
    CategoryBarViewModel, CategoryOptionViewModel, SearchBarViewModel, ShellScreenViewModel,
    StatusBarViewModel,
};

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
