//! Status Bar View
//!
//! Renders the bottom bar with the dish count and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::palette;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::FAINT));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(
                format!("Dishes: {} ", self.model.dish_count),
                Style::default().fg(palette::GOLD),
            ),
            Span::raw("| "),
            Span::styled(
                self.model.active_tab.as_str(),
                Style::default().fg(palette::TEXT),
            ),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let mut hint_spans = Vec::new();
        for hint in &self.model.hints {
            hint_spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(ratatui::style::Color::Yellow),
            ));
            hint_spans.push(Span::raw(format!(" {}  ", hint.action)));
        }
        Paragraph::new(Line::from(hint_spans))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
