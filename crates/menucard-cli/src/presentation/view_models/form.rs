use serde::Serialize;

/// Focusable controls of the Add Dish form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormControl {
    #[default]
    Name,
    Category,
    Price,
    Description,
    Cancel,
    Save,
}

impl FormControl {
    pub const ORDER: [FormControl; 6] = [
        FormControl::Name,
        FormControl::Category,
        FormControl::Price,
        FormControl::Description,
        FormControl::Cancel,
        FormControl::Save,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FormControl::Name | FormControl::Price | FormControl::Description
        )
    }
}

/// Add Dish page
#[derive(Debug, Clone, Serialize)]
pub struct AddDishFormViewModel {
    pub title: String,
    pub name: TextFieldViewModel,
    pub category: CategorySelectorViewModel,
    pub price: TextFieldViewModel,
    pub description: TextFieldViewModel,
    pub buttons: Vec<ButtonViewModel>,
    pub focus: FormControl,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextFieldViewModel {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub multiline: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySelectorViewModel {
    pub label: String,
    pub options: Vec<CategoryOptionViewModel>,
    pub focused: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOptionViewModel {
    pub label: String,
    /// Digit that selects this option directly
    pub hotkey: char,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonViewModel {
    pub label: String,
    pub control: FormControl,
    pub focused: bool,
    /// Primary buttons are drawn filled
    pub primary: bool,
}
