//! Interactive shell state: load lifecycle, focus and scroll.
//!
//! Pure state machine. The TUI renderer maps keys to `ShellAction`s and
//! load results to `settle`; everything drawn is derived from here.

use pokedex_client::FetchError;
use pokedex_engine::{Browser, PageSnapshot, ViewState};
use serde::Serialize;

use crate::catalog_loader::LoadOutcome;

/// Scroll offset (in lines) past which the back-to-top hint shows.
pub const BACK_TO_TOP_THRESHOLD: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    Loading,
    Error,
    Empty,
    Populated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Browse,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    FocusSearch,
    LeaveSearch,
    TypeChar(char),
    Backspace,
    ClearSearch,
    NextCategory,
    PrevCategory,
    NextPage,
    PrevPage,
    /// 1-based slot in the visible page window
    JumpToSlot(usize),
    ScrollDown,
    ScrollUp,
    BackToTop,
    Reload,
    Quit,
}

/// Side effects the shell asks its driver to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    StartLoad,
}

#[derive(Debug)]
enum Phase {
    Loading,
    Failed { message: String },
    Ready(Browser),
}

#[derive(Debug)]
pub struct Shell {
    phase: Phase,
    /// View state collected before a catalog is available.
    pending: ViewState,
    page_size: usize,
    focus: Focus,
    scroll: u16,
    max_scroll: u16,
    should_quit: bool,
}

impl Shell {
    /// A shell in `Loading`; the driver starts the first load.
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: Phase::Loading,
            pending: ViewState::new(),
            page_size: page_size.max(1),
            focus: Focus::Browse,
            scroll: 0,
            max_scroll: u16::MAX,
            should_quit: false,
        }
    }

    pub fn render_state(&self) -> RenderState {
        match &self.phase {
            Phase::Loading => RenderState::Loading,
            Phase::Failed { .. } => RenderState::Error,
            Phase::Ready(browser) => {
                if browser.snapshot().is_empty() {
                    RenderState::Empty
                } else {
                    RenderState::Populated
                }
            }
        }
    }

    pub fn browser(&self) -> Option<&Browser> {
        match &self.phase {
            Phase::Ready(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<PageSnapshot<'_>> {
        self.browser().map(Browser::snapshot)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        match &self.phase {
            Phase::Ready(browser) => browser.state(),
            _ => &self.pending,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll >= BACK_TO_TOP_THRESHOLD
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Upper scroll bound for the current frame; set by the renderer.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Apply a finished load. Only a shell in `Loading` accepts it; returns
    /// whether the outcome was used.
    pub fn settle(&mut self, outcome: LoadOutcome) -> bool {
        if !matches!(self.phase, Phase::Loading) {
            tracing::debug!("ignoring load outcome outside of loading state");
            return false;
        }

        self.phase = match outcome {
            LoadOutcome::Loaded(catalog) => {
                tracing::info!(entities = catalog.len(), "loading -> ready");
                let state = std::mem::take(&mut self.pending);
                Phase::Ready(Browser::with_state(*catalog, state, self.page_size))
            }
            LoadOutcome::Failed(err) => {
                tracing::warn!(error = %err, "loading -> error");
                Phase::Failed {
                    message: FetchError::USER_MESSAGE.to_string(),
                }
            }
        };
        self.scroll = 0;
        true
    }

    pub fn apply(&mut self, action: ShellAction) -> Option<ShellEffect> {
        match action {
            ShellAction::Quit => self.should_quit = true,
            ShellAction::FocusSearch => self.focus = Focus::Search,
            ShellAction::LeaveSearch => self.focus = Focus::Browse,
            ShellAction::TypeChar(c) => self.edit_view(|state| state.push_search_char(c)),
            ShellAction::Backspace => self.edit_view(ViewState::pop_search_char),
            ShellAction::ClearSearch => self.edit_view(|state| state.set_search_term("")),
            ShellAction::NextCategory => self.navigate(|browser| {
                browser.cycle_category(true);
                true
            }),
            ShellAction::PrevCategory => self.navigate(|browser| {
                browser.cycle_category(false);
                true
            }),
            ShellAction::NextPage => self.navigate(Browser::next_page),
            ShellAction::PrevPage => self.navigate(Browser::prev_page),
            ShellAction::JumpToSlot(slot) => self.navigate(|browser| {
                let target = slot
                    .checked_sub(1)
                    .and_then(|i| browser.snapshot().visible_pages.get(i).copied());
                target.is_some_and(|page| browser.go_to_page(page))
            }),
            ShellAction::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
            }
            ShellAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            ShellAction::BackToTop => self.scroll = 0,
            ShellAction::Reload => {
                if matches!(self.phase, Phase::Failed { .. }) {
                    tracing::info!("error -> loading (reload)");
                    self.phase = Phase::Loading;
                    self.scroll = 0;
                    return Some(ShellEffect::StartLoad);
                }
            }
        }
        None
    }

    /// Search edits go to the browser once loaded, to the pending state before.
    fn edit_view(&mut self, edit: impl FnOnce(&mut ViewState)) {
        match &mut self.phase {
            Phase::Ready(browser) => {
                let mut state = browser.state().clone();
                edit(&mut state);
                browser.set_search_term(state.search_term());
            }
            _ => edit(&mut self.pending),
        }
        self.scroll = 0;
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Browser) -> bool) {
        if let Phase::Ready(browser) = &mut self.phase
            && step(browser)
        {
            self.scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_engine::PAGE_SIZE;
    use pokedex_testing::fixtures;
    use pokedex_types::Catalog;

    fn catalog(count: u32) -> Catalog {
        let entities = fixtures::synthetic_roster(count);
        let categories = pokedex_client::derive_categories(&entities);
        Catalog {
            entities,
            categories,
        }
    }

    fn loaded(count: u32) -> LoadOutcome {
        LoadOutcome::Loaded(Box::new(catalog(count)))
    }

    fn failed() -> LoadOutcome {
        LoadOutcome::Failed(FetchError::new("memory://pokemon/1", "boom"))
    }

    #[test]
    fn test_starts_loading() {
        let shell = Shell::new(PAGE_SIZE);
        assert_eq!(shell.render_state(), RenderState::Loading);
        assert!(shell.browser().is_none());
        assert!(!shell.should_quit());
    }

    #[test]
    fn test_success_populates() {
        let mut shell = Shell::new(PAGE_SIZE);
        assert!(shell.settle(loaded(150)));
        assert_eq!(shell.render_state(), RenderState::Populated);

        let page = shell.snapshot().unwrap();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total_pages, 13);
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let mut shell = Shell::new(PAGE_SIZE);
        assert!(shell.settle(failed()));
        assert_eq!(shell.render_state(), RenderState::Error);
        assert_eq!(shell.error_message(), Some("Failed to fetch Pokémon data"));
    }

    #[test]
    fn test_settle_only_from_loading() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.settle(failed());
        assert!(!shell.settle(loaded(10)));
        assert_eq!(shell.render_state(), RenderState::Error);
    }

    #[test]
    fn test_reload_only_from_error() {
        let mut shell = Shell::new(PAGE_SIZE);
        assert_eq!(shell.apply(ShellAction::Reload), None);

        shell.settle(failed());
        assert_eq!(shell.apply(ShellAction::Reload), Some(ShellEffect::StartLoad));
        assert_eq!(shell.render_state(), RenderState::Loading);
        assert_eq!(shell.apply(ShellAction::Reload), None);

        shell.settle(loaded(10));
        assert_eq!(shell.apply(ShellAction::Reload), None);
        assert_eq!(shell.render_state(), RenderState::Populated);
    }

    #[test]
    fn test_search_typed_while_loading_is_kept() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.apply(ShellAction::FocusSearch);
        for c in "creature-00".chars() {
            shell.apply(ShellAction::TypeChar(c));
        }
        assert_eq!(shell.view_state().search_term(), "creature-00");

        shell.settle(loaded(150));
        let page = shell.snapshot().unwrap();
        assert_eq!(page.search_term, "creature-00");
        assert_eq!(page.filtered_count, 9);
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.settle(loaded(30));
        for c in "zzz".chars() {
            shell.apply(ShellAction::TypeChar(c));
        }
        assert_eq!(shell.render_state(), RenderState::Empty);

        shell.apply(ShellAction::Backspace);
        shell.apply(ShellAction::ClearSearch);
        assert_eq!(shell.render_state(), RenderState::Populated);
    }

    #[test]
    fn test_paging_and_search_reset() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.settle(loaded(150));

        shell.apply(ShellAction::NextPage);
        shell.apply(ShellAction::NextPage);
        assert_eq!(shell.view_state().current_page(), 3);

        shell.apply(ShellAction::PrevPage);
        assert_eq!(shell.view_state().current_page(), 2);

        shell.apply(ShellAction::TypeChar('c'));
        assert_eq!(shell.view_state().current_page(), 1);

        shell.apply(ShellAction::NextPage);
        shell.apply(ShellAction::NextCategory);
        assert_eq!(shell.view_state().current_page(), 1);
        assert_eq!(shell.view_state().selected_category(), "fire");

        shell.apply(ShellAction::PrevCategory);
        assert_eq!(shell.view_state().selected_category(), "");
    }

    #[test]
    fn test_jump_to_slot_uses_visible_window() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.settle(loaded(150));

        shell.apply(ShellAction::JumpToSlot(5));
        assert_eq!(shell.view_state().current_page(), 5);

        // Window is now [3, 4, 5, 6, 7]
        shell.apply(ShellAction::JumpToSlot(5));
        assert_eq!(shell.view_state().current_page(), 7);

        shell.apply(ShellAction::JumpToSlot(0));
        shell.apply(ShellAction::JumpToSlot(9));
        assert_eq!(shell.view_state().current_page(), 7);
    }

    #[test]
    fn test_scroll_and_back_to_top() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.settle(loaded(150));
        shell.set_max_scroll(8);

        for _ in 0..20 {
            shell.apply(ShellAction::ScrollDown);
        }
        assert_eq!(shell.scroll(), 8);
        assert!(shell.show_back_to_top());

        shell.apply(ShellAction::BackToTop);
        assert_eq!(shell.scroll(), 0);
        assert!(!shell.show_back_to_top());

        shell.apply(ShellAction::ScrollDown);
        shell.apply(ShellAction::NextPage);
        assert_eq!(shell.scroll(), 0);
    }

    #[test]
    fn test_focus_and_quit() {
        let mut shell = Shell::new(PAGE_SIZE);
        shell.apply(ShellAction::FocusSearch);
        assert_eq!(shell.focus(), Focus::Search);
        shell.apply(ShellAction::LeaveSearch);
        assert_eq!(shell.focus(), Focus::Browse);

        shell.apply(ShellAction::Quit);
        assert!(shell.should_quit());
    }
}
