use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the catalog interactively (default)")]
    Browse,

    #[command(about = "Print one page of the filtered catalog")]
    List {
        /// Case-insensitive name search
        #[arg(long, short)]
        search: Option<String>,

        /// Only show Pokémon of this type
        #[arg(long, short = 't', alias = "type")]
        category: Option<String>,

        /// Page number; clamped to the available pages
        #[arg(long, default_value = "1")]
        page: usize,
    },

    #[command(about = "List the types present in the catalog")]
    Categories,

    #[command(about = "Manage the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a config file with default values")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Show the effective settings")]
    Show,
}
