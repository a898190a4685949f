//! Full-area placeholders for Loading, Error and Empty.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

fn centered(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let height = lines.len() as u16;
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    let body = Rect {
        y: top,
        height: height.min(inner.height),
        ..inner
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body, buf);
}

pub struct LoadingView;

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        centered(
            vec![Line::from(Span::styled(
                "Loading Pokémon...",
                Style::default().fg(Color::Cyan),
            ))],
            area,
            buf,
        );
    }
}

pub struct ErrorView<'a> {
    message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for ErrorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        centered(
            vec![
                Line::from(Span::styled(
                    self.message,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("[r]", Style::default().fg(Color::Yellow)),
                    Span::raw(" to retry"),
                ]),
            ],
            area,
            buf,
        );
    }
}

pub struct EmptyView;

impl Widget for EmptyView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        centered(
            vec![
                Line::from(Span::styled(
                    "No Pokémon found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Try a different search or type",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            area,
            buf,
        );
    }
}
