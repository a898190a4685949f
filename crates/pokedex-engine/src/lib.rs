// Engine module - catalog view-model
// Sits between the loaded catalog (types) and the presentation layer (cli).
// Everything here is a pure function of (entities, ViewState) except the
// setters on ViewState/Browser, which only touch owned state.

pub mod browser;
pub mod filter;
pub mod pagination;
pub mod state;

pub use browser::{Browser, PageSnapshot};
pub use filter::{filter, matches};
pub use pagination::{MAX_VISIBLE_PAGES, PAGE_SIZE, paginate, total_pages, visible_pages};
pub use state::ViewState;
