use menucard_runtime::{DisplayConfig, MenuStore};

use crate::presentation::view_models::{DishCardViewModel, MenuListViewModel};

pub const EMPTY_MENU_MESSAGE: &str = "No dishes added yet.";

pub fn build_menu_view_model(store: &MenuStore, display: &DisplayConfig) -> MenuListViewModel {
    let dishes: Vec<DishCardViewModel> = store
        .dishes()
        .iter()
        .map(|dish| DishCardViewModel {
            id: dish.id.as_u64(),
            name: dish.name.clone(),
            category: dish.category.label().to_string(),
            price: dish.price.clone(),
            description: dish.description.clone(),
        })
        .collect();

    let empty_message = dishes
        .is_empty()
        .then(|| EMPTY_MENU_MESSAGE.to_string());

    MenuListViewModel {
        title: display.title.clone(),
        total_count: dishes.len(),
        currency_label: display.currency_label.clone(),
        dishes,
        empty_message,
        revision: store.revision(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menucard_types::{Category, DishId, DishRecord};

    #[test]
    fn test_empty_store_has_placeholder_and_zero_count() {
        let vm = build_menu_view_model(&MenuStore::new(), &DisplayConfig::default());
        assert_eq!(vm.total_count, 0);
        assert!(vm.dishes.is_empty());
        assert_eq!(vm.empty_message.as_deref(), Some("No dishes added yet."));
    }

    #[test]
    fn test_dishes_keep_store_order() {
        let mut store = MenuStore::new();
        for (id, name) in [(5, "Soup"), (2, "Steak"), (9, "Sorbet")] {
            store.append(DishRecord {
                id: DishId::new(id),
                name: name.to_string(),
                description: String::new(),
                category: Category::Mains,
                price: "1".to_string(),
            });
        }

        let vm = build_menu_view_model(&store, &DisplayConfig::default());
        let names: Vec<_> = vm.dishes.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Soup", "Steak", "Sorbet"]);
        assert_eq!(vm.total_count, 3);
        assert!(vm.empty_message.is_none());
        assert_eq!(vm.revision, 3);
    }
}
