use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SearchBarViewModel;

const PLACEHOLDER: &str = "Search Pokémon...";

pub struct SearchBarView<'a> {
    model: &'a SearchBarViewModel,
}

impl<'a> SearchBarView<'a> {
    pub fn new(model: &'a SearchBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Pokédex ");

        let mut spans = vec![Span::styled("🔍 ", Style::default())];
        if self.model.term.is_empty() && !self.model.focused {
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::raw(self.model.term.as_str()));
        }
        if self.model.focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
