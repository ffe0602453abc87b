//! # Presentation Layer
//!
//! MVVM with component-based UI state for the interactive TUI.
//!
//! ## Data Flow
//!
//! ### Console output (`config` commands):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                        ==(Text)==> [ View ]
//! ```
//!
//! ### Interactive TUI:
//!
//! ```text
//! [ TuiRenderer ] --key--> [ TabContainer ] --key--> [ Component ] (MenuList / AddDish)
//!                                 |                        |
//!                                 |<------ Action ---------+   (form -> container only)
//!                                 v
//!                          [ MenuStore::append ]
//!                                 |
//!                                 v
//!                  [ Presenter ] --> [ TuiScreenViewModel ] --> [ View widgets ]
//! ```
//!
//! ## Rules
//!
//! 1. **Data vs State.** View models are read-only snapshots built by
//!    presenters. Scroll position, focus and in-progress form text live in
//!    components.
//! 2. **Renderer as Router.** The renderer owns the terminal and forwards
//!    keys; the tab container decides which component gets them.
//! 3. **Index Safety.** Components clamp selections against the data they
//!    are about to render.
//! 4. **Action Boundaries.** Focus moves and text edits stay inside a
//!    component. Anything that changes the menu goes up as an action.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide what a screen shows | `presenters/` |
//! | Change a colour or layout | `views/` |
//! | Handle a key | `views/tui/components/` |
//! | Format a price | `formatters/` |

pub mod formatters;
pub mod models;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
