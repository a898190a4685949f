// NOTE: pokedex Architecture Rationale
//
// Why load everything up front (not page-by-page from the API)?
// - 150 detail records is small enough to hold in memory
// - Search and category filters need every record's name and types anyway
// - Trade-off: slower first paint, but filtering and paging never hit the network
//
// Why fail the whole load when one detail request fails?
// - A catalog with silent holes is worse than an explicit error with a reload key
// - Keeps the render states simple: Loading, Error, Empty, Populated
//
// Why a worker thread for loading (not async all the way down)?
// - The TUI event loop is synchronous (crossterm polling)
// - The worker owns the tokio runtime and posts exactly one settle event per load

mod args;
pub mod catalog_loader;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod shell;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
