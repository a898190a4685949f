//! Testing infrastructure for pokedex integration tests.
//!
//! - `fixtures`: entity builders and canned rosters
//! - `source`: in-memory `CatalogSource` with injectable failures
//! - `server`: mock PokeAPI HTTP server for end-to-end runs
//! - `world`: isolated CLI environment (`TestWorld`)
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod source;
pub mod world;

pub use fixtures::EntityBuilder;
pub use server::MockPokeApi;
pub use source::MemorySource;
pub use world::TestWorld;
