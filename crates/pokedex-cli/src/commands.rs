use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, Overrides, resolve_config_path};
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Browse) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!(path = %config_path.display(), "resolved config path");

    let overrides = Overrides {
        api_url: cli.api_url,
        roster_limit: cli.limit,
        page_size: cli.page_size,
    };

    // `config init` must work even when the existing file is broken
    if let Commands::Config {
        command: ConfigCommand::Init { force },
    } = command
    {
        let settings = Config::default().resolve(&overrides);
        let ctx = HandlerContext::new(cli.format, settings, config_path);
        return handlers::config::handle_init(&ctx, force);
    }

    let settings = Config::load_from(&config_path)?.resolve(&overrides);
    let ctx = HandlerContext::new(cli.format, settings, config_path);

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::List {
            search,
            category,
            page,
        } => handlers::list::handle(&ctx, search, category, page),

        Commands::Categories => handlers::categories::handle(&ctx),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
        },
    }
}
