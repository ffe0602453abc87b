// NOTE: menucard Architecture Rationale
//
// Why in-memory only?
// - A menu board is drafted and reviewed in one sitting
// - Nothing is written to disk except the optional config and log files
// - Trade-off: quitting discards the menu
//
// Why a single-threaded event loop?
// - Every mutation is the direct result of one key press
// - The store has exactly one writer (the tab container), so no locking
//
// Why is price free text?
// - Menus write prices as "185", "185.00", "MP" or "2 for 90"
// - Only emptiness is checked; formatting is left to whoever writes the menu

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
