use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use pokedex_engine::Browser;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let browser = Browser::new(ctx.load_catalog()?, ctx.settings.page_size);
    let vm = presenters::present_category_list(&browser);
    ctx.render(CommandResultViewModel::summarized(vm))
}
