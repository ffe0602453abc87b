use menucard_runtime::DisplayConfig;
use menucard_types::{Category, DishDraft};

use crate::presentation::formatters::price_placeholder;
use crate::presentation::view_models::{
    AddDishFormViewModel, ButtonViewModel, CategoryOptionViewModel, CategorySelectorViewModel,
    FormControl, TextFieldViewModel,
};

pub fn build_add_dish_view_model(
    draft: &DishDraft,
    focus: FormControl,
    display: &DisplayConfig,
) -> AddDishFormViewModel {
    let text_field = |label: &str, value: &str, placeholder: String, control: FormControl| {
        TextFieldViewModel {
            label: label.to_string(),
            value: value.to_string(),
            placeholder,
            multiline: control == FormControl::Description,
            focused: focus == control,
        }
    };

    let options = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| CategoryOptionViewModel {
            label: category.label().to_string(),
            hotkey: char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
            selected: *category == draft.category,
        })
        .collect();

    let buttons = [
        (FormControl::Cancel, "Cancel", false),
        (FormControl::Save, "Save", true),
    ]
    .into_iter()
    .map(|(control, label, primary)| ButtonViewModel {
        label: label.to_string(),
        control,
        focused: focus == control,
        primary,
    })
    .collect();

    AddDishFormViewModel {
        title: "Add New Dish".to_string(),
        name: text_field(
            "Dish Name",
            &draft.name,
            "e.g. Grilled Salmon".to_string(),
            FormControl::Name,
        ),
        category: CategorySelectorViewModel {
            label: "Select Category".to_string(),
            options,
            focused: focus == FormControl::Category,
        },
        price: text_field(
            "Price",
            &draft.price,
            price_placeholder(&display.currency_label),
            FormControl::Price,
        ),
        description: text_field(
            "Description",
            &draft.description,
            "Short description of the dish".to_string(),
            FormControl::Description,
        ),
        buttons,
        focus,
    }
}
