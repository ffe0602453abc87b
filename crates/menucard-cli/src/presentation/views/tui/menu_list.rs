//! Menu List View
//!
//! Header (title + item count), one card per dish, or the empty-state line.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::presentation::formatters::format_price;
use crate::presentation::view_models::MenuListViewModel;

use super::palette;

pub struct MenuListView<'a> {
    model: &'a MenuListViewModel,
}

impl<'a> MenuListView<'a> {
    pub fn new(model: &'a MenuListViewModel) -> Self {
        Self { model }
    }

    /// Two centred lines: the menu title and the total count
    pub fn header(&self) -> Paragraph<'a> {
        let gold = Style::default().fg(palette::GOLD);
        Paragraph::new(vec![
            Line::from(Span::styled(
                self.model.title.as_str(),
                gold.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Total menu items: {}", self.model.total_count),
                gold,
            )),
        ])
        .alignment(Alignment::Center)
    }

    /// Placeholder shown instead of the list when there are no dishes
    pub fn empty_state(&self) -> Option<Paragraph<'a>> {
        let message = self.model.empty_message.as_deref()?;
        Some(
            Paragraph::new(vec![
                Line::default(),
                Line::default(),
                Line::from(Span::styled(message, Style::default().fg(palette::FAINT))),
            ])
            .alignment(Alignment::Center),
        )
    }

    /// Build the card list for stateful rendering by `MenuListComponent`
    pub fn build_list(&self) -> List<'a> {
        let muted = Style::default().fg(palette::TEXT);

        let items: Vec<ListItem<'a>> = self
            .model
            .dishes
            .iter()
            .map(|dish| {
                let mut lines = vec![
                    Line::from(Span::styled(
                        dish.name.as_str(),
                        Style::default()
                            .fg(palette::GOLD)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(dish.category.as_str(), muted)),
                    Line::from(Span::styled(
                        format_price(&self.model.currency_label, &dish.price),
                        Style::default().fg(palette::PRICE),
                    )),
                ];
                lines.extend(
                    dish.description
                        .lines()
                        .map(|line| Line::from(Span::styled(line, muted))),
                );
                lines.push(Line::default());

                ListItem::new(Text::from(lines))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::GOLD))
            .padding(Padding::horizontal(1));

        List::new(items)
            .block(block)
            .style(Style::default().bg(palette::SURFACE))
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
    }
}
