use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub file_exists: bool,
    pub api_base_url: String,
    pub roster_limit: usize,
    pub user_agent: String,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView::new(self))
    }
}
