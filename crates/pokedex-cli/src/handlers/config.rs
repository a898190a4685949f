use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use anyhow::Result;

pub fn handle_init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    let exists = path.exists();
    if exists && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    let vm = presenters::present_config_init(path, exists);
    ctx.render(
        CommandResultViewModel::new(vm)
            .with_badge(StatusBadge::success("Config written"))
            .with_suggestions(vec![
                Guidance::new("Review the effective settings").with_command("pokedex config show"),
            ]),
    )
}

pub fn handle_show(ctx: &HandlerContext) -> Result<()> {
    let vm = presenters::present_config(&ctx.config_path, &ctx.settings);
    ctx.render(CommandResultViewModel::new(vm))
}
