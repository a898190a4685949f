//! TUI renderer for the interactive browser.
//!
//! ## Design:
//! - `Shell` owns all UI state; the renderer routes keys and load outcomes into it
//! - Each frame is drawn from a fresh `ShellScreenViewModel`
//! - Loading runs on the worker behind `commands`/`outcomes`; the loop never blocks on it

mod mapper;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
};

use crate::catalog_loader::{LoadCommand, LoadOutcome};
use crate::presentation::presenters::present_shell;
use crate::presentation::view_models::ShellScreenViewModel;
use crate::presentation::views::tui::{
    CardGridView, CategoryBarView, EmptyView, ErrorView, LoadingView, PaginationView,
    SearchBarView, StatusBarView,
};
use crate::shell::{RenderState, Shell, ShellEffect};

pub struct ShellRenderer {
    shell: Shell,
    commands: Sender<LoadCommand>,
    outcomes: Receiver<LoadOutcome>,
}

impl ShellRenderer {
    pub fn new(shell: Shell, commands: Sender<LoadCommand>, outcomes: Receiver<LoadOutcome>) -> Self {
        Self {
            shell,
            commands,
            outcomes,
        }
    }

    /// Take over the terminal, run until the user quits, then restore it.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.start_load();
        let result = self.event_loop(&mut terminal);
        let restored = restore_terminal(&mut terminal);

        // A loop error outranks a teardown error
        result.and(restored)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let screen = present_shell(&self.shell);
            let scroll = self.shell.scroll();
            let mut max_scroll = 0;
            terminal.draw(|f| max_scroll = render(f, &screen, scroll))?;
            self.shell.set_max_scroll(max_scroll);

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    self.shell.settle(outcome);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    if self.shell.render_state() == RenderState::Loading {
                        anyhow::bail!("catalog loader stopped unexpectedly");
                    }
                }
            }

            if self.shell.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let Some(action) = mapper::map_key(self.shell.focus(), key) else {
            return;
        };

        if let Some(ShellEffect::StartLoad) = self.shell.apply(action) {
            self.start_load();
        }
    }

    fn start_load(&self) {
        if self.commands.send(LoadCommand::Load).is_err() {
            tracing::warn!("catalog loader is gone; load request dropped");
        }
    }
}

/// Undo raw mode and the alternate screen. Every step runs even when an
/// earlier one fails; the first failure is returned.
fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Draw one frame; returns the largest useful scroll offset for the grid.
fn render(f: &mut Frame, screen: &ShellScreenViewModel, scroll: u16) -> u16 {
    let has_pages = screen.page.is_some();
    let chunks = Layout::vertical([
        Constraint::Length(3),                             // Search
        Constraint::Length(3),                             // Categories
        Constraint::Min(6),                                // Content
        Constraint::Length(if has_pages { 3 } else { 0 }), // Pagination
        Constraint::Length(3),                             // Status bar
    ])
    .split(f.area());

    f.render_widget(SearchBarView::new(&screen.search), chunks[0]);
    f.render_widget(CategoryBarView::new(&screen.categories), chunks[1]);

    let max_scroll = render_content(f, screen, scroll, chunks[2]);

    if let Some(page) = &screen.page {
        f.render_widget(
            PaginationView::new(&page.pagination, page.filtered_count),
            chunks[3],
        );
    }
    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[4]);

    max_scroll
}

fn render_content(f: &mut Frame, screen: &ShellScreenViewModel, scroll: u16, area: Rect) -> u16 {
    match (screen.state, &screen.page) {
        (RenderState::Loading, _) => {
            f.render_widget(LoadingView, area);
            0
        }
        (RenderState::Error, _) => {
            let message = screen.error_message.as_deref().unwrap_or_default();
            f.render_widget(ErrorView::new(message), area);
            0
        }
        (RenderState::Empty, _) | (RenderState::Populated, None) => {
            f.render_widget(EmptyView, area);
            0
        }
        (RenderState::Populated, Some(page)) => {
            let content = CardGridView::content_height(page.items.len(), area.width);
            let max_scroll = content.saturating_sub(area.height);
            f.render_widget(CardGridView::new(&page.items, scroll.min(max_scroll)), area);
            max_scroll
        }
    }
}
