use super::HandlerContext;
use crate::presentation::ShellRenderer;
use crate::shell::Shell;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let loader = ctx.loader()?;
    tracing::info!(api = %loader.config().api_base_url, "starting browser");

    let (commands, outcomes) = loader.spawn();
    let shell = Shell::new(ctx.settings.page_size);

    ShellRenderer::new(shell, commands, outcomes).run()
}
