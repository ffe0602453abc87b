//! Add Dish Form View
//!
//! Lays out the labelled inputs, the category selector and the two buttons
//! top to bottom in the same order as the focus cycle.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{
    AddDishFormViewModel, ButtonViewModel, CategorySelectorViewModel, TextFieldViewModel,
};

use super::palette;

const DESCRIPTION_ROWS: u16 = 3;

pub struct AddDishFormView<'a> {
    model: &'a AddDishFormViewModel,
}

impl<'a> AddDishFormView<'a> {
    pub fn new(model: &'a AddDishFormViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AddDishFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(2),                    // Title
            Constraint::Length(1),                    // Name label
            Constraint::Length(3),                    // Name input
            Constraint::Length(1),                    // Category label
            Constraint::Length(3),                    // Category options
            Constraint::Length(1),                    // Price label
            Constraint::Length(3),                    // Price input
            Constraint::Length(1),                    // Description label
            Constraint::Length(DESCRIPTION_ROWS + 2), // Description input
            Constraint::Length(3),                    // Buttons
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new(Span::styled(
            self.model.title.as_str(),
            Style::default()
                .fg(palette::GOLD)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        render_label(&self.model.name.label, rows[1], buf);
        render_text_field(&self.model.name, rows[2], buf);

        render_label(&self.model.category.label, rows[3], buf);
        render_category_selector(&self.model.category, rows[4], buf);

        render_label(&self.model.price.label, rows[5], buf);
        render_text_field(&self.model.price, rows[6], buf);

        render_label(&self.model.description.label, rows[7], buf);
        render_text_field(&self.model.description, rows[8], buf);

        render_buttons(&self.model.buttons, rows[9], buf);
    }
}

fn render_label(label: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(palette::GOLD)
            .add_modifier(Modifier::BOLD),
    ))
    .render(area, buf);
}

fn field_block(focused: bool) -> Block<'static> {
    let (border_type, color) = if focused {
        (BorderType::Thick, palette::GOLD)
    } else {
        (BorderType::Rounded, palette::FAINT)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
}

fn render_text_field(field: &TextFieldViewModel, area: Rect, buf: &mut Buffer) {
    let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED));
    let value_style = Style::default().fg(ratatui::style::Color::White);

    let mut lines: Vec<Line> = if field.value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder.as_str(),
            Style::default().fg(palette::FAINT),
        );
        if field.focused {
            vec![Line::from(vec![cursor.clone(), placeholder])]
        } else {
            vec![Line::from(placeholder)]
        }
    } else {
        field
            .value
            .split('\n')
            .map(|line| Line::from(Span::styled(line, value_style)))
            .collect()
    };

    if field.focused
        && !field.value.is_empty()
        && let Some(last) = lines.last_mut()
    {
        last.spans.push(cursor);
    }

    // Keep the cursor line visible once a description outgrows its box
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible.max(1)) as u16;

    let mut paragraph = Paragraph::new(Text::from(lines))
        .block(field_block(field.focused))
        .style(Style::default().bg(palette::SURFACE));
    if field.multiline {
        paragraph = paragraph.wrap(Wrap { trim: false }).scroll((scroll, 0));
    }
    paragraph.render(area, buf);
}

fn render_category_selector(selector: &CategorySelectorViewModel, area: Rect, buf: &mut Buffer) {
    let count = selector.options.len().max(1) as u32;
    let cells = Layout::horizontal(
        selector
            .options
            .iter()
            .map(|_| Constraint::Ratio(1, count)),
    )
    .split(area);

    for (option, cell) in selector.options.iter().zip(cells.iter()) {
        let style = if option.selected {
            Style::default()
                .fg(palette::BACKGROUND)
                .bg(palette::GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette::GOLD)
        };

        let border_style = if selector.focused {
            Style::default().fg(palette::GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette::FAINT)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        Paragraph::new(Span::styled(option.label.as_str(), style))
            .alignment(Alignment::Center)
            .block(block)
            .render(*cell, buf);
    }
}

fn render_buttons(buttons: &[ButtonViewModel], area: Rect, buf: &mut Buffer) {
    let count = buttons.len().max(1) as u32;
    let cells = Layout::horizontal(buttons.iter().map(|_| Constraint::Ratio(1, count)))
        .spacing(2)
        .split(area);

    for (button, cell) in buttons.iter().zip(cells.iter()) {
        let fill = if button.primary {
            Style::default()
                .fg(palette::BACKGROUND)
                .bg(palette::GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(palette::BUTTON)
                .add_modifier(Modifier::BOLD)
        };

        let mut block = field_block(button.focused);
        if !button.focused {
            block = block.border_style(Style::default().fg(palette::BUTTON));
        }

        Paragraph::new(Span::raw(button.label.as_str()))
            .alignment(Alignment::Center)
            .style(fill)
            .block(block)
            .render(*cell, buf);
    }
}
