pub mod catalog;
pub mod config;
pub mod tui;

pub use catalog::{CatalogPageView, CategoryListView};
pub use config::{ConfigInitView, ConfigView};
