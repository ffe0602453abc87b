//! Notice View
//!
//! Modal box drawn over the page after Save. Clears what is underneath.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::NoticeViewModel;

use super::{centered_rect, palette, status_level_to_color};

const WIDTH: u16 = 46;

pub struct NoticeView<'a> {
    model: &'a NoticeViewModel,
}

impl<'a> NoticeView<'a> {
    pub fn new(model: &'a NoticeViewModel) -> Self {
        Self { model }
    }

    /// Area the notice occupies inside `screen`
    pub fn area(&self, screen: Rect) -> Rect {
        let extra = if self.model.missing_fields.is_empty() { 0 } else { 2 };
        centered_rect(WIDTH, 7 + extra, screen)
    }
}

impl<'a> Widget for NoticeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.model.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];

        if !self.model.missing_fields.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Missing: {}", self.model.missing_fields.join(", ")),
                Style::default().fg(palette::TEXT),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(ratatui::style::Color::Yellow)),
            Span::styled(" OK", Style::default().fg(palette::FAINT)),
        ]));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::SURFACE));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
