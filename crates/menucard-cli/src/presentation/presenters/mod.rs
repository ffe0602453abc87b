pub mod config;
pub mod form;
pub mod menu;
pub mod screen;

pub use config::present_config;
pub use form::build_add_dish_view_model;
pub use menu::build_menu_view_model;
pub use screen::{ScreenState, build_notice_view_model, build_screen_view_model};
