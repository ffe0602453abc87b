//! Screen-level view model for the TUI.
//!
//! The presenter fills in only the page that belongs to the active tab; the
//! tab bar and status bar are always present.

use serde::Serialize;

use super::common::StatusLevel;
use super::form::AddDishFormViewModel;
use super::menu::MenuListViewModel;

/// Navigation destinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    ViewMenu,
    AddDish,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::ViewMenu, ActiveTab::AddDish];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::ViewMenu => "View Menu",
            ActiveTab::AddDish => "Add Dish",
        }
    }

    pub fn key_hint(self) -> &'static str {
        match self {
            ActiveTab::ViewMenu => "F1",
            ActiveTab::AddDish => "F2",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActiveTab::ViewMenu => 0,
            ActiveTab::AddDish => 1,
        }
    }
}

/// Complete screen state for TUI rendering
#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub tabs: TabBarViewModel,
    /// Present when the "View Menu" tab is active
    pub menu: Option<MenuListViewModel>,
    /// Present when the "Add Dish" tab is active
    pub add_dish: Option<AddDishFormViewModel>,
    /// Blocking message shown on top of the page
    pub notice: Option<NoticeViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabBarViewModel {
    pub tabs: Vec<TabItemViewModel>,
    pub active_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabItemViewModel {
    pub label: String,
    pub key_hint: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeViewModel {
    pub title: String,
    pub message: String,
    pub level: StatusLevel,
    /// Labels of the fields that blocked a save
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub dish_count: usize,
    pub active_tab: String,
    pub hints: Vec<KeyHintViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyHintViewModel {
    pub key: String,
    pub action: String,
}
