//! Tab Bar View
//!
//! Renders the two navigation destinations with their function-key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::TabBarViewModel;

use super::palette;

pub struct TabBarView<'a> {
    model: &'a TabBarViewModel,
}

impl<'a> TabBarView<'a> {
    pub fn new(model: &'a TabBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TabBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .tabs
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", tab.key_hint),
                        Style::default().fg(palette::FAINT),
                    ),
                    Span::raw(tab.label.as_str()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::GOLD))
            .title(Span::styled(
                " menucard ",
                Style::default()
                    .fg(palette::GOLD)
                    .add_modifier(Modifier::BOLD),
            ));

        Tabs::new(titles)
            .block(block)
            .select(self.model.active_index)
            .style(Style::default().fg(palette::TEXT))
            .highlight_style(
                Style::default()
                    .fg(palette::GOLD)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(area, buf);
    }
}
