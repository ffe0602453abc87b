//! Tab Container
//!
//! Root component of the TUI. Owns the menu store and both pages, routes keys
//! to the active page and turns form outcomes into store updates and notices.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use menucard_runtime::{DishIdGenerator, DisplayConfig, MenuStore};
use menucard_types::DishDraft;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::{AddDishComponent, FormAction, MenuListAction, MenuListComponent};
use crate::presentation::models::Notice;
use crate::presentation::presenters::{ScreenState, build_screen_view_model};
use crate::presentation::view_models::{ActiveTab, FormControl, TuiScreenViewModel};
use crate::presentation::views::tui::{NoticeView, StatusBarView, TabBarView};

pub struct TabContainer {
    store: MenuStore,
    active: ActiveTab,
    menu: MenuListComponent,
    form: AddDishComponent,
    notice: Option<Notice>,
    display: DisplayConfig,
    should_quit: bool,
}

impl TabContainer {
    pub fn new(display: DisplayConfig, store: MenuStore, ids: DishIdGenerator) -> Self {
        Self {
            store,
            active: ActiveTab::default(),
            menu: MenuListComponent::new(),
            form: AddDishComponent::new(ids),
            notice: None,
            display,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn draft(&self) -> &DishDraft {
        self.form.draft()
    }

    pub fn focus(&self) -> FormControl {
        self.form.focus()
    }

    pub fn selected_dish(&self) -> Option<usize> {
        self.menu.selected()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        if self.active != tab {
            tracing::debug!(event = "cli.tui.tab_switched", tab = tab.label(), "Tab switched");
            self.active = tab;
        }
    }

    /// Route one key event
    pub fn handle_input(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        // Notices block everything else until dismissed
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => return self.select_tab(ActiveTab::ViewMenu),
            KeyCode::F(2) => return self.select_tab(ActiveTab::AddDish),
            _ => {}
        }

        match self.active {
            ActiveTab::ViewMenu => match self.menu.handle_input(key, self.store.len()) {
                Some(MenuListAction::OpenAddDish) => self.select_tab(ActiveTab::AddDish),
                Some(MenuListAction::Quit) => self.should_quit = true,
                None => {}
            },
            ActiveTab::AddDish => {
                if let Some(action) = self.form.handle_input(key) {
                    self.apply(action);
                }
            }
        }
    }

    fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Submitted(record) => {
                self.store.append(record);
                self.notice = Some(Notice::DishAdded);
            }
            FormAction::Rejected(err) => {
                self.notice = Some(Notice::Incomplete(err));
            }
            FormAction::Cancelled => {}
        }
    }

    pub fn screen_view_model(&self) -> TuiScreenViewModel {
        build_screen_view_model(&ScreenState {
            active: self.active,
            store: &self.store,
            draft: self.form.draft(),
            focus: self.form.focus(),
            notice: self.notice.as_ref(),
            display: &self.display,
        })
    }

    /// Render the whole screen
    pub fn render(&mut self, f: &mut Frame) {
        let screen = self.screen_view_model();
        let area = f.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Page
            Constraint::Length(3), // Status bar
        ])
        .split(area);

        f.render_widget(TabBarView::new(&screen.tabs), chunks[0]);

        if let Some(menu) = &screen.menu {
            self.menu.render(f, chunks[1], menu);
        }
        if let Some(form) = &screen.add_dish {
            self.form.render(f, chunks[1], form);
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[2]);

        if let Some(notice) = &screen.notice {
            let view = NoticeView::new(notice);
            let notice_area = view.area(area);
            f.render_widget(view, notice_area);
        }
    }
}
