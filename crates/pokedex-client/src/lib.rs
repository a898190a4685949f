//! Catalog loader for PokeAPI.
//!
//! One roster request, then one detail request per roster entry, all in
//! flight at once. The load either yields every entity or fails as a whole.

pub mod config;
pub mod error;
pub mod loader;
pub mod pokeapi;
pub mod source;

pub use config::ClientConfig;
pub use error::{FetchError, Result};
pub use loader::{derive_categories, load_catalog};
pub use pokeapi::PokeApiClient;
pub use source::CatalogSource;
