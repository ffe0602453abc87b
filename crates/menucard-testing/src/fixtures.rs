//! Sample dishes for tests.

use menucard_types::{Category, DishId, DishRecord};

pub fn dish(id: u64, name: &str, category: Category, price: &str, description: &str) -> DishRecord {
    DishRecord {
        id: DishId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
    }
}

/// One dish per category, ids 1..=4.
pub fn sample_menu() -> Vec<DishRecord> {
    vec![
        dish(1, "Bruschetta", Category::Starters, "65", "Tomato and basil on toast"),
        dish(2, "Grilled Salmon", Category::Mains, "185", "Pan-seared salmon"),
        dish(3, "Malva Pudding", Category::Dessert, "70", "Warm, with custard"),
        dish(4, "Rooibos Iced Tea", Category::Drinks, "35", ""),
    ]
}
