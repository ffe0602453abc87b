//! TUI Views and Stateful Components
//!
//! 1. **Views**: Stateless Ratatui widgets that map a view model to cells.
//! 2. **Components**: Own UI state (selection, focus, form input), handle keys
//!    and delegate drawing to views.
//!
//! Views never compute anything beyond layout. Colours come from the palette
//! below so the listing and the form share one look: gold on black.

pub mod add_dish_form;
pub mod components;
pub mod menu_list;
pub mod notice;
pub mod status_bar;
pub mod tab_bar;

pub use add_dish_form::AddDishFormView;
pub use components::{AddDishComponent, FormAction, MenuListAction, MenuListComponent, TabContainer};
pub use menu_list::MenuListView;
pub use notice::NoticeView;
pub use status_bar::StatusBarView;
pub use tab_bar::TabBarView;

use crate::presentation::view_models::common::StatusLevel;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub(crate) mod palette {
    use ratatui::style::Color;

    pub const GOLD: Color = Color::Rgb(0xB8, 0x86, 0x0B);
    pub const PRICE: Color = Color::Rgb(0x00, 0xFF, 0x99);
    pub const TEXT: Color = Color::Rgb(0xCC, 0xCC, 0xCC);
    pub const FAINT: Color = Color::Rgb(0x66, 0x66, 0x66);
    pub const SURFACE: Color = Color::Rgb(0x11, 0x11, 0x11);
    pub const BUTTON: Color = Color::Rgb(0x33, 0x33, 0x33);
    pub const BACKGROUND: Color = Color::Black;
}

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => palette::PRICE,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Rect of at most `width` x `height`, centred in `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
