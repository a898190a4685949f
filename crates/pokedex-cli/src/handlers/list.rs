use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use pokedex_engine::Browser;

pub fn handle(
    ctx: &HandlerContext,
    search: Option<String>,
    category: Option<String>,
    page: usize,
) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let total_entities = catalog.len();
    let mut browser = Browser::new(catalog, ctx.settings.page_size);

    if let Some(term) = search {
        browser.set_search_term(term);
    }
    if let Some(category) = category {
        browser.set_selected_category(category.to_lowercase());
    }

    let target = page.clamp(1, browser.total_pages().max(1));
    if target != page {
        tracing::debug!(requested = page, clamped = target, "page out of range");
    }
    browser.go_to_page(target);

    let vm = presenters::present_catalog_page(&browser.snapshot(), total_entities);
    ctx.render(CommandResultViewModel::summarized(vm))
}
