//! Add Dish Component
//!
//! Owns the draft and the focus cursor. Saving validates the draft and hands
//! a finished `DishRecord` to the container; the component never touches the
//! store itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menucard_runtime::DishIdGenerator;
use menucard_types::{Category, DishDraft, DishRecord, IncompleteSubmission};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::{AddDishFormViewModel, FormControl};
use crate::presentation::views::tui::AddDishFormView;

/// Outcomes the container has to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Submitted(DishRecord),
    Rejected(IncompleteSubmission),
    Cancelled,
}

pub struct AddDishComponent {
    draft: DishDraft,
    focus: FormControl,
    ids: DishIdGenerator,
}

impl AddDishComponent {
    pub fn new(ids: DishIdGenerator) -> Self {
        Self {
            draft: DishDraft::default(),
            focus: FormControl::Name,
            ids,
        }
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn focus(&self) -> FormControl {
        self.focus
    }

    /// Handle keyboard input
    ///
    /// Returns `Some` only for Save and Cancel.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FormAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => Some(self.submit()),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(self.cancel()),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_mut() {
                    field.pop();
                }
                None
            }
            KeyCode::Left if self.focus == FormControl::Category => {
                self.draft.category = self.draft.category.previous();
                None
            }
            KeyCode::Right if self.focus == FormControl::Category => {
                self.draft.category = self.draft.category.next();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.handle_char(c);
                None
            }
            _ => None,
        }
    }

    /// Validate and, when complete, turn the draft into a record
    ///
    /// A rejected draft is kept as typed so the user can fix it.
    pub fn submit(&mut self) -> FormAction {
        match self.draft.validate() {
            Ok(valid) => {
                let record = valid.into_record(self.ids.next_id());
                tracing::info!(
                    event = "cli.form.submitted",
                    id = record.id.as_u64(),
                    category = %record.category,
                    "Dish submitted"
                );
                self.reset();
                FormAction::Submitted(record)
            }
            Err(err) => {
                tracing::debug!(
                    event = "cli.form.rejected",
                    missing = err.missing.len(),
                    "Submission rejected"
                );
                FormAction::Rejected(err)
            }
        }
    }

    pub fn cancel(&mut self) -> FormAction {
        tracing::debug!(event = "cli.form.cancelled", "Form cleared");
        self.reset();
        FormAction::Cancelled
    }

    pub fn render(&self, f: &mut Frame, area: Rect, data: &AddDishFormViewModel) {
        f.render_widget(AddDishFormView::new(data), area);
    }

    fn reset(&mut self) {
        self.draft.clear();
        self.focus = FormControl::Name;
    }

    fn handle_enter(&mut self) -> Option<FormAction> {
        match self.focus {
            FormControl::Description => {
                self.draft.description.push('\n');
                None
            }
            FormControl::Cancel => Some(self.cancel()),
            FormControl::Save => Some(self.submit()),
            FormControl::Name | FormControl::Category | FormControl::Price => {
                self.focus = self.focus.next();
                None
            }
        }
    }

    fn handle_char(&mut self, c: char) {
        match self.focus {
            FormControl::Name => self.draft.name.push(c),
            FormControl::Description => self.draft.description.push(c),
            FormControl::Price => {
                if accepts_price_char(c) {
                    self.draft.price.push(c);
                }
            }
            FormControl::Category => self.select_category_by_key(c),
            FormControl::Cancel | FormControl::Save => {}
        }
    }

    fn select_category_by_key(&mut self, c: char) {
        match c {
            'h' => self.draft.category = self.draft.category.previous(),
            'l' => self.draft.category = self.draft.category.next(),
            _ => {
                let picked = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Category::from_index);
                if let Some(category) = picked {
                    self.draft.category = category;
                }
            }
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormControl::Name => Some(&mut self.draft.name),
            FormControl::Price => Some(&mut self.draft.price),
            FormControl::Description => Some(&mut self.draft.description),
            _ => None,
        }
    }
}

fn accepts_price_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(form: &mut AddDishComponent, code: KeyCode) -> Option<FormAction> {
        form.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(form: &mut AddDishComponent, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_focus_cycles_through_every_control() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        let mut seen = vec![form.focus()];
        for _ in 0..5 {
            press(&mut form, KeyCode::Tab);
            seen.push(form.focus());
        }
        assert_eq!(seen, FormControl::ORDER.to_vec());

        press(&mut form, KeyCode::Tab);
        assert_eq!(form.focus(), FormControl::Name);
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focus(), FormControl::Save);
    }

    #[test]
    fn test_price_ignores_letters() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Tab);
        assert_eq!(form.focus(), FormControl::Price);

        type_str(&mut form, "R12a.5x0");
        assert_eq!(form.draft().price, "12.50");
    }

    #[test]
    fn test_category_keys_keep_single_selection() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        press(&mut form, KeyCode::Tab);

        press(&mut form, KeyCode::Right);
        assert_eq!(form.draft().category, Category::Mains);
        press(&mut form, KeyCode::Char('4'));
        assert_eq!(form.draft().category, Category::Drinks);
        press(&mut form, KeyCode::Char('l'));
        assert_eq!(form.draft().category, Category::Starters);
        press(&mut form, KeyCode::Char('9'));
        assert_eq!(form.draft().category, Category::Starters);
    }

    #[test]
    fn test_enter_in_description_adds_newline() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        for _ in 0..3 {
            press(&mut form, KeyCode::Tab);
        }
        type_str(&mut form, "crisp");
        press(&mut form, KeyCode::Enter);
        type_str(&mut form, "fresh");
        assert_eq!(form.draft().description, "crisp\nfresh");
        assert_eq!(form.focus(), FormControl::Description);
    }

    #[test]
    fn test_submit_resets_and_returns_focus() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        type_str(&mut form, "Soup");
        press(&mut form, KeyCode::Enter);
        press(&mut form, KeyCode::Enter);
        type_str(&mut form, "45");

        let action = form.handle_input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        match action {
            Some(FormAction::Submitted(record)) => {
                assert_eq!(record.name, "Soup");
                assert_eq!(record.price, "45");
            }
            other => panic!("expected submission, got {:?}", other),
        }
        assert!(form.draft().is_cleared());
        assert_eq!(form.focus(), FormControl::Name);
    }

    #[test]
    fn test_rejected_submit_keeps_fields() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        type_str(&mut form, "Soup");

        let action = form.submit();
        assert!(matches!(action, FormAction::Rejected(_)));
        assert_eq!(form.draft().name, "Soup");
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = AddDishComponent::new(DishIdGenerator::new());
        type_str(&mut form, "Soup");
        press(&mut form, KeyCode::Tab);

        assert_eq!(press(&mut form, KeyCode::Esc), Some(FormAction::Cancelled));
        assert!(form.draft().is_cleared());
        assert_eq!(form.focus(), FormControl::Name);
    }
}
