//! Testing infrastructure for menucard tests.
//!
//! - `keys`: Builders for crossterm key events
//! - `screen`: Text extraction and assertions over rendered ratatui buffers
//! - `fixtures`: Sample dish records
//! - `world`: Isolated config directory + CLI execution

pub mod fixtures;
pub mod keys;
pub mod screen;
pub mod world;

pub use world::{CliResult, TestWorld};
