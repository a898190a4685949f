//! View models for the interactive browser screen.

use serde::Serialize;

use super::catalog::CatalogPageViewModel;
use super::common::StatusLevel;
use crate::shell::{Focus, RenderState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarViewModel {
    pub term: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOptionViewModel {
    /// Empty label is the "all" option.
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBarViewModel {
    pub options: Vec<CategoryOptionViewModel>,
}

impl CategoryBarViewModel {
    pub fn selected_index(&self) -> usize {
        self.options.iter().position(|o| o.selected).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub focus: Focus,
    pub can_reload: bool,
    pub show_back_to_top: bool,
}

/// Everything one frame of the browser draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellScreenViewModel {
    pub state: RenderState,
    pub search: SearchBarViewModel,
    pub categories: CategoryBarViewModel,
    /// Present in `Empty` and `Populated`.
    pub page: Option<CatalogPageViewModel>,
    pub error_message: Option<String>,
    pub status_bar: StatusBarViewModel,
}
