pub mod catalog;
pub mod config;
pub mod screen;

pub use catalog::{catalog_suggestions, present_catalog_page, present_category_list};
pub use config::{present_config, present_config_init};
pub use screen::present_shell;
