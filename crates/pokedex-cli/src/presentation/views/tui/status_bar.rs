//! Bottom status bar: state message on the left, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;
use crate::shell::Focus;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }

    fn help(&self) -> Vec<(&'static str, &'static str)> {
        if self.model.focus == Focus::Search {
            return vec![("[Enter/Esc]", "done "), ("[Ctrl-U]", "clear")];
        }

        let mut keys = vec![("[/]", "search "), ("[j/k]", "scroll ")];
        if self.model.show_back_to_top {
            keys.push(("[t]", "back to top "));
        }
        if self.model.can_reload {
            keys.push(("[r]", "retry "));
        }
        keys.push(("[q]", "quit"));
        keys
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(inner);

        let status_line = Line::from(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ));
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_line = Line::from(
            self.help()
                .into_iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(key, Style::default().fg(Color::Yellow)),
                        Span::raw(label),
                    ]
                })
                .collect::<Vec<_>>(),
        );
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
