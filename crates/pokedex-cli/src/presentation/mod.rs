//! # Presentation Layer
//!
//! MVVM-style output for both console commands and the interactive browser.
//!
//! ## Data Flow
//!
//! ### Console (`list`, `categories`, `config`):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                        ==(Text)==> [ View ]
//! ```
//!
//! ### Interactive (`browse`):
//!
//! ```text
//! [ Shell ] --> [ present_shell ] --> [ ShellScreenViewModel ] --> [ ShellRenderer ] --> [ Widgets ]
//!    ^                                                                   |
//!    +------------------------ ShellAction (keys) -----------------------+
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** Ids stay numbers, names stay lowercase;
//!    `#006` and `Charizard` are produced by views via `formatters`. JSON
//!    output is the ViewModel as-is.
//! 2. **Presenters compute, views lay out.** Counts, status messages and
//!    suggestions come from `presenters/`; colors and padding from `views/`.
//! 3. **UI state lives in `Shell`.** Focus, scroll and the load lifecycle are
//!    never part of a ViewModel beyond what a frame needs to draw.
//! 4. **Renderers route.** `ShellRenderer` maps keys to `ShellAction`s and
//!    forwards load outcomes; it makes no view decisions of its own.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, ShellRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
};
