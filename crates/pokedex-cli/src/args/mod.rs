mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Search and filter through the first 150 Pokémon", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $POKEDEX_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// PokeAPI base URL, e.g. https://pokeapi.co/api/v2
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Number of roster entries to load
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Cards per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Append logs to this file instead of stderr (the TUI only logs when set)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
