use crate::presentation::presenters::catalog::present_catalog_page;
use crate::presentation::view_models::{
    CategoryBarViewModel, CategoryOptionViewModel, SearchBarViewModel, ShellScreenViewModel,
    StatusBarViewModel, StatusLevel,
};
use crate::shell::{Focus, RenderState, Shell};

pub fn present_shell(shell: &Shell) -> ShellScreenViewModel {
    let state = shell.render_state();
    let view_state = shell.view_state();

    let page = shell.browser().map(|browser| {
        present_catalog_page(&browser.snapshot(), browser.catalog().len())
    });

    let labels: Vec<String> = shell
        .browser()
        .map(|browser| browser.categories().to_vec())
        .unwrap_or_default();
    let options = std::iter::once(String::new())
        .chain(labels)
        .map(|label| CategoryOptionViewModel {
            selected: label == view_state.selected_category(),
            label,
        })
        .collect();

    let (message, level) = match (state, &page) {
        (RenderState::Loading, _) => ("Loading Pokémon...".to_string(), StatusLevel::Info),
        (RenderState::Error, _) => (
            shell.error_message().unwrap_or_default().to_string(),
            StatusLevel::Error,
        ),
        (RenderState::Empty, _) => ("No Pokémon found".to_string(), StatusLevel::Warning),
        (RenderState::Populated, Some(page)) => (
            format!(
                "Showing {} of {} Pokémon",
                page.filtered_count, page.total_entities
            ),
            StatusLevel::Success,
        ),
        (RenderState::Populated, None) => (String::new(), StatusLevel::Info),
    };

    ShellScreenViewModel {
        state,
        search: SearchBarViewModel {
            term: view_state.search_term().to_string(),
            focused: shell.focus() == Focus::Search,
        },
        categories: CategoryBarViewModel { options },
        page,
        error_message: shell.error_message().map(str::to_string),
        status_bar: StatusBarViewModel {
            message,
            level,
            focus: shell.focus(),
            can_reload: state == RenderState::Error,
            show_back_to_top: shell.show_back_to_top(),
        },
    }
}
