pub mod text;

pub use text::{capitalize, format_id, shell_quote, truncate_start};
