use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use super::category_color;
use crate::presentation::formatters::capitalize;
use crate::presentation::view_models::CategoryBarViewModel;

pub struct CategoryBarView<'a> {
    model: &'a CategoryBarViewModel,
}

impl<'a> CategoryBarView<'a> {
    pub fn new(model: &'a CategoryBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CategoryBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .options
            .iter()
            .map(|option| {
                if option.label.is_empty() {
                    Line::styled("All Types", Style::default())
                } else {
                    Line::styled(
                        capitalize(&option.label),
                        Style::default().fg(category_color(&option.label)),
                    )
                }
            })
            .collect();

        Tabs::new(titles)
            .select(self.model.selected_index())
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .divider("·")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Type [c/C] "),
            )
            .render(area, buf);
    }
}
