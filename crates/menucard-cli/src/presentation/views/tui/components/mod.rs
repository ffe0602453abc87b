//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent) -> Option<FooAction> {
//!         // Handle input, return action if parent needs to respond
//!     }
//!
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel) {
//!         // Index safety checks here
//!         // Render using Views
//!     }
//! }
//! ```

pub mod add_dish;
pub mod menu_list;
pub mod tab_container;

pub use add_dish::{AddDishComponent, FormAction};
pub use menu_list::{MenuListAction, MenuListComponent};
pub use tab_container::TabContainer;
