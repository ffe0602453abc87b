pub mod config;
pub mod error;
pub mod ids;
pub mod store;

pub use config::{Config, DisplayConfig, UiConfig, resolve_config_path};
pub use error::{Error, Result};
pub use ids::DishIdGenerator;
pub use store::MenuStore;
