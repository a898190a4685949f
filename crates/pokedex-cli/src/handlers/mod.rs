mod context;

pub mod browse;
pub mod categories;
pub mod config;
pub mod list;

pub use context::HandlerContext;
