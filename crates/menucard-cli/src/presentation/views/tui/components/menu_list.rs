//! Menu List Component
//!
//! Encapsulates the card selection state of the "View Menu" page.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};

use crate::presentation::view_models::MenuListViewModel;
use crate::presentation::views::tui::MenuListView;

const PAGE: usize = 10;

/// Actions that the listing can emit to the tab container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuListAction {
    OpenAddDish,
    Quit,
}

pub struct MenuListComponent {
    /// List state (scroll position, selection) - PRIVATE
    state: ListState,
    /// Store revision of the last rendered snapshot
    seen_revision: Option<u64>,
}

impl MenuListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            seen_revision: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Handle keyboard input
    ///
    /// Returns an action when the container has to respond.
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<MenuListAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(data_len),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::PageDown => self.page_down(data_len),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.scroll_to_top(data_len),
            KeyCode::End => self.scroll_to_bottom(data_len),
            KeyCode::Char('a') | KeyCode::Char('l') | KeyCode::Tab | KeyCode::Right => {
                return Some(MenuListAction::OpenAddDish);
            }
            KeyCode::Char('q') => return Some(MenuListAction::Quit),
            _ => {}
        }
        None
    }

    /// Render the listing
    ///
    /// A newly appended dish becomes the selection so it is scrolled into view.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &MenuListViewModel) {
        self.sync_with(data);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        let view = MenuListView::new(data);
        f.render_widget(view.header(), chunks[0]);

        if let Some(empty) = view.empty_state() {
            f.render_widget(empty, chunks[2]);
            return;
        }

        f.render_stateful_widget(view.build_list(), chunks[2], &mut self.state);
    }

    fn sync_with(&mut self, data: &MenuListViewModel) {
        let len = data.dishes.len();

        match self.seen_revision {
            Some(seen) if seen != data.revision && len > 0 => {
                self.state.select(Some(len - 1));
            }
            None if len > 0 && self.state.selected().is_none() => {
                self.state.select(Some(0));
            }
            _ => {}
        }
        self.seen_revision = Some(data.revision);

        // Index Safety: Clamp selection to data bounds
        if let Some(selected) = self.state.selected() {
            if len == 0 {
                self.state.select(None);
            } else if selected >= len {
                self.state.select(Some(len - 1));
            }
        }
    }

    // Private state manipulation methods

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + 1).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => return,
        };
        self.state.select(Some(prev));
    }

    fn page_down(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + PAGE).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn page_up(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(PAGE)));
        }
    }

    fn scroll_to_top(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(0));
        }
    }

    fn scroll_to_bottom(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(data_len - 1));
        }
    }
}

impl Default for MenuListComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(list: &mut MenuListComponent, code: KeyCode, len: usize) -> Option<MenuListAction> {
        list.handle_input(KeyEvent::new(code, KeyModifiers::NONE), len)
    }

    #[test]
    fn test_selection_never_passes_last_index() {
        let mut list = MenuListComponent::new();
        for _ in 0..5 {
            press(&mut list, KeyCode::Down, 3);
        }
        assert_eq!(list.selected(), Some(2));

        press(&mut list, KeyCode::PageDown, 3);
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut list = MenuListComponent::new();
        press(&mut list, KeyCode::Down, 0);
        press(&mut list, KeyCode::End, 0);
        press(&mut list, KeyCode::Up, 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_home_end_and_paging() {
        let mut list = MenuListComponent::new();
        press(&mut list, KeyCode::End, 25);
        assert_eq!(list.selected(), Some(24));
        press(&mut list, KeyCode::PageUp, 25);
        assert_eq!(list.selected(), Some(14));
        press(&mut list, KeyCode::Home, 25);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_navigation_keys_emit_actions() {
        let mut list = MenuListComponent::new();
        assert_eq!(
            press(&mut list, KeyCode::Char('a'), 0),
            Some(MenuListAction::OpenAddDish)
        );
        assert_eq!(
            press(&mut list, KeyCode::Tab, 0),
            Some(MenuListAction::OpenAddDish)
        );
        assert_eq!(press(&mut list, KeyCode::Char('q'), 0), Some(MenuListAction::Quit));
        assert_eq!(press(&mut list, KeyCode::Down, 0), None);
    }
}
