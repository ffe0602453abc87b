pub mod common;
pub mod config;
pub mod form;
pub mod menu;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use form::{
    AddDishFormViewModel, ButtonViewModel, CategoryOptionViewModel, CategorySelectorViewModel,
    FormControl, TextFieldViewModel,
};
pub use menu::{DishCardViewModel, MenuListViewModel};
pub use result::CommandResultViewModel;
pub use screen::{
    ActiveTab, KeyHintViewModel, NoticeViewModel, StatusBarViewModel, TabBarViewModel,
    TabItemViewModel, TuiScreenViewModel,
};

use std::fmt;

/// Bridges a view model to its text view for console output.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
