//! Ratatui widgets for the interactive browser.
//!
//! Each view borrows a view model and maps it to widgets. No state, no
//! filtering; color choices live here.

pub mod card_grid;
pub mod category_bar;
pub mod pagination;
pub mod search_bar;
pub mod states;
pub mod status_bar;

pub use card_grid::CardGridView;
pub use category_bar::CategoryBarView;
pub use pagination::PaginationView;
pub use search_bar::SearchBarView;
pub use states::{EmptyView, ErrorView, LoadingView};
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Badge color for a type label.
pub(crate) fn category_color(category: &str) -> Color {
    match category {
        "fire" => Color::Red,
        "water" => Color::Blue,
        "grass" | "bug" => Color::Green,
        "electric" => Color::Yellow,
        "psychic" | "poison" => Color::Magenta,
        "ice" | "flying" => Color::Cyan,
        "fighting" | "dragon" => Color::LightRed,
        "ground" | "rock" => Color::LightYellow,
        "ghost" | "dark" => Color::DarkGray,
        "fairy" => Color::LightMagenta,
        "steel" => Color::LightBlue,
        _ => Color::Gray,
    }
}
