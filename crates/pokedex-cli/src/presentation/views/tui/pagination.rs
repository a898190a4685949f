use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::PaginationViewModel;

pub struct PaginationView<'a> {
    model: &'a PaginationViewModel,
    filtered_count: usize,
}

impl<'a> PaginationView<'a> {
    pub fn new(model: &'a PaginationViewModel, filtered_count: usize) -> Self {
        Self {
            model,
            filtered_count,
        }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let enabled = Style::default().fg(Color::Yellow);
        let disabled = Style::default().fg(Color::DarkGray);

        let mut spans = vec![Span::styled(
            "‹ Prev",
            if self.model.has_prev { enabled } else { disabled },
        )];
        spans.push(Span::raw("  "));

        for &page in &self.model.visible_pages {
            let label = format!(" {} ", page);
            let style = if page == self.model.current_page {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(label, style));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "Next ›",
            if self.model.has_next { enabled } else { disabled },
        ));
        spans.push(Span::styled(
            format!(
                "   page {} of {} · {} results",
                self.model.current_page,
                self.model.total_pages.max(1),
                self.filtered_count
            ),
            Style::default().fg(Color::DarkGray),
        ));
        spans
    }
}

impl<'a> Widget for PaginationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Pages [←/→, 1-5] ");

        Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
