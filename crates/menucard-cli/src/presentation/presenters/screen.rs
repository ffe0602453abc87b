use menucard_runtime::{DisplayConfig, MenuStore};
use menucard_types::DishDraft;

use super::{build_add_dish_view_model, build_menu_view_model};
use crate::presentation::models::Notice;
use crate::presentation::view_models::{
    ActiveTab, FormControl, KeyHintViewModel, NoticeViewModel, StatusBarViewModel, StatusLevel,
    TabBarViewModel, TabItemViewModel, TuiScreenViewModel,
};

/// Everything the screen presenter reads, borrowed from the tab container
pub struct ScreenState<'a> {
    pub active: ActiveTab,
    pub store: &'a MenuStore,
    pub draft: &'a DishDraft,
    pub focus: FormControl,
    pub notice: Option<&'a Notice>,
    pub display: &'a DisplayConfig,
}

pub fn build_screen_view_model(state: &ScreenState<'_>) -> TuiScreenViewModel {
    let tabs = TabBarViewModel {
        tabs: ActiveTab::ALL
            .iter()
            .map(|tab| TabItemViewModel {
                label: tab.label().to_string(),
                key_hint: tab.key_hint().to_string(),
                is_active: *tab == state.active,
            })
            .collect(),
        active_index: state.active.index(),
    };

    let (menu, add_dish) = match state.active {
        ActiveTab::ViewMenu => (Some(build_menu_view_model(state.store, state.display)), None),
        ActiveTab::AddDish => (
            None,
            Some(build_add_dish_view_model(
                state.draft,
                state.focus,
                state.display,
            )),
        ),
    };

    let notice = state.notice.map(build_notice_view_model);

    let status_bar = StatusBarViewModel {
        dish_count: state.store.len(),
        active_tab: state.active.label().to_string(),
        hints: key_hints(state.active, notice.is_some()),
    };

    TuiScreenViewModel {
        tabs,
        menu,
        add_dish,
        notice,
        status_bar,
    }
}

pub fn build_notice_view_model(notice: &Notice) -> NoticeViewModel {
    match notice {
        Notice::DishAdded => NoticeViewModel {
            title: "Success".to_string(),
            message: notice.message(),
            level: StatusLevel::Success,
            missing_fields: Vec::new(),
        },
        Notice::Incomplete(err) => NoticeViewModel {
            title: "Missing details".to_string(),
            message: notice.message(),
            level: StatusLevel::Error,
            missing_fields: err.missing.iter().map(|f| f.to_string()).collect(),
        },
    }
}

fn key_hints(active: ActiveTab, notice_open: bool) -> Vec<KeyHintViewModel> {
    let pairs: &[(&str, &str)] = if notice_open {
        &[("Enter", "dismiss")]
    } else {
        match active {
            ActiveTab::ViewMenu => &[("↑/↓", "browse"), ("F2", "add dish"), ("q", "quit")],
            ActiveTab::AddDish => &[
                ("Tab", "next field"),
                ("←/→", "category"),
                ("Ctrl+S", "save"),
                ("Esc", "cancel"),
                ("F1", "menu"),
            ],
        }
    };

    pairs
        .iter()
        .map(|(key, action)| KeyHintViewModel {
            key: key.to_string(),
            action: action.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use menucard_types::{IncompleteSubmission, RequiredField};

    fn state<'a>(
        active: ActiveTab,
        store: &'a MenuStore,
        draft: &'a DishDraft,
        notice: Option<&'a Notice>,
        display: &'a DisplayConfig,
    ) -> ScreenState<'a> {
        ScreenState {
            active,
            store,
            draft,
            focus: FormControl::Name,
            notice,
            display,
        }
    }

    #[test]
    fn test_only_active_page_is_populated() {
        let store = MenuStore::new();
        let draft = DishDraft::default();
        let display = DisplayConfig::default();

        let vm = build_screen_view_model(&state(ActiveTab::ViewMenu, &store, &draft, None, &display));
        assert!(vm.menu.is_some());
        assert!(vm.add_dish.is_none());
        assert_eq!(vm.tabs.active_index, 0);

        let vm = build_screen_view_model(&state(ActiveTab::AddDish, &store, &draft, None, &display));
        assert!(vm.menu.is_none());
        assert!(vm.add_dish.is_some());
        assert_eq!(vm.tabs.active_index, 1);
        assert_eq!(vm.status_bar.active_tab, "Add Dish");
    }

    #[test]
    fn test_incomplete_notice_lists_missing_fields() {
        let notice = Notice::Incomplete(IncompleteSubmission {
            missing: vec![RequiredField::Name, RequiredField::Price],
        });
        let vm = build_notice_view_model(&notice);
        assert_eq!(vm.message, "Please fill in all required fields.");
        assert_eq!(vm.level, StatusLevel::Error);
        assert_eq!(vm.missing_fields, ["Dish Name", "Price"]);
    }

    #[test]
    fn test_open_notice_replaces_hints() {
        let store = MenuStore::new();
        let draft = DishDraft::default();
        let display = DisplayConfig::default();
        let notice = Notice::DishAdded;

        let vm = build_screen_view_model(&state(
            ActiveTab::AddDish,
            &store,
            &draft,
            Some(&notice),
            &display,
        ));
        let notice_vm = vm.notice.expect("notice should be present");
        assert_eq!(notice_vm.message, "Dish added successfully!");
        assert_eq!(vm.status_bar.hints.len(), 1);
        assert_eq!(vm.status_bar.hints[0].key, "Enter");
    }
}
