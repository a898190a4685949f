//! Card grid. Cards are laid out as text rows so the grid scrolls by line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::category_color;
use crate::presentation::formatters::{capitalize, format_id, truncate_start};
use crate::presentation::view_models::EntityCardViewModel;

pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 6;
const GUTTER: u16 = 1;

pub struct CardGridView<'a> {
    cards: &'a [EntityCardViewModel],
    scroll: u16,
}

impl<'a> CardGridView<'a> {
    pub fn new(cards: &'a [EntityCardViewModel], scroll: u16) -> Self {
        Self { cards, scroll }
    }

    /// Cards per row for a given width (at least one).
    pub fn columns(width: u16) -> usize {
        (width.saturating_add(GUTTER) / (CARD_WIDTH + GUTTER)).max(1) as usize
    }

    /// Total lines the grid needs at `width`.
    pub fn content_height(card_count: usize, width: u16) -> u16 {
        let rows = card_count.div_ceil(Self::columns(width));
        (rows as u16).saturating_mul(CARD_HEIGHT)
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let columns = Self::columns(width);
        let mut lines = Vec::new();

        for row in self.cards.chunks(columns) {
            let cards: Vec<Vec<Vec<Span<'static>>>> = row.iter().map(card_lines).collect();
            for i in 0..CARD_HEIGHT as usize {
                let mut spans = Vec::new();
                for (n, card) in cards.iter().enumerate() {
                    if n > 0 {
                        spans.push(Span::raw(" ".repeat(GUTTER as usize)));
                    }
                    spans.extend(card[i].iter().cloned());
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}

const INNER_WIDTH: usize = (CARD_WIDTH - 4) as usize;

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// `│ <content padded to the inner width> │`
fn boxed(content: Vec<Span<'static>>) -> Vec<Span<'static>> {
    let used: usize = content.iter().map(|s| s.content.chars().count()).sum();
    let mut spans = vec![Span::styled("│ ", border_style())];
    spans.extend(content);
    spans.push(Span::raw(" ".repeat(INNER_WIDTH.saturating_sub(used))));
    spans.push(Span::styled(" │", border_style()));
    spans
}

fn text_row(text: String, style: Style) -> Vec<Span<'static>> {
    let text: String = text.chars().take(INNER_WIDTH).collect();
    boxed(vec![Span::styled(text, style)])
}

/// One span per type badge, each in its own color. Badges that do not fit
/// are left out.
fn badge_row(categories: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut used = 0;

    for category in categories {
        let badge = format!("[{}]", category);
        let gap = usize::from(!spans.is_empty());
        let width = badge.chars().count() + gap;
        if used + width > INNER_WIDTH {
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            badge,
            Style::default().fg(category_color(category)),
        ));
        used += width;
    }

    boxed(spans)
}

/// Span groups for each card line, each group exactly `CARD_WIDTH` columns wide.
fn card_lines(card: &EntityCardViewModel) -> Vec<Vec<Span<'static>>> {
    let sprite = card
        .image_url
        .as_deref()
        .map(|url| truncate_start(url, INNER_WIDTH))
        .unwrap_or_else(|| "(no image)".to_string());
    let edge = "─".repeat(INNER_WIDTH + 2);

    vec![
        vec![Span::styled(format!("┌{}┐", edge), border_style())],
        text_row(format_id(card.id), Style::default().fg(Color::DarkGray)),
        text_row(
            capitalize(&card.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        badge_row(&card.categories),
        text_row(sprite, Style::default().fg(Color::DarkGray)),
        vec![Span::styled(format!("└{}┘", edge), border_style())],
    ]
}

impl<'a> Widget for CardGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
