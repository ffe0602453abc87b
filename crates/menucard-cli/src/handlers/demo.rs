use anyhow::Result;
use menucard_runtime::{Config, DishIdGenerator, MenuStore};
use menucard_types::{Category, DishDraft, DishRecord};

const SAMPLE_DISHES: &[(&str, Category, &str, &str)] = &[
    (
        "Bruschetta",
        Category::Starters,
        "65",
        "Grilled bread, tomato, basil and olive oil",
    ),
    (
        "Grilled Salmon",
        Category::Mains,
        "185",
        "Pan-seared salmon with lemon butter",
    ),
    (
        "Lamb Shank",
        Category::Mains,
        "210",
        "Slow braised, served on mash",
    ),
    (
        "Malva Pudding",
        Category::Dessert,
        "70",
        "Warm sponge with vanilla custard",
    ),
    ("Rooibos Iced Tea", Category::Drinks, "35", ""),
];

pub fn handle(config: &Config) -> Result<()> {
    let mut ids = DishIdGenerator::new();
    let store = sample_store(&mut ids);
    tracing::info!(event = "cli.demo.seeded", dishes = store.len(), "Demo menu seeded");

    super::tui::handle(config, store, ids)
}

/// Build the demo menu, drawing ids from the same generator the form uses
pub fn sample_store(ids: &mut DishIdGenerator) -> MenuStore {
    let mut store = MenuStore::new();
    store.extend(SAMPLE_DISHES.iter().filter_map(|(name, category, price, description)| {
        sample_record(ids, name, *category, price, description)
    }));
    store
}

fn sample_record(
    ids: &mut DishIdGenerator,
    name: &str,
    category: Category,
    price: &str,
    description: &str,
) -> Option<DishRecord> {
    let draft = DishDraft {
        name: name.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
    };
    draft
        .validate()
        .ok()
        .map(|valid| valid.into_record(ids.next_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_store_has_every_dish_with_unique_ids() {
        let mut ids = DishIdGenerator::new();
        let store = sample_store(&mut ids);
        assert_eq!(store.len(), SAMPLE_DISHES.len());

        let unique: HashSet<_> = store.dishes().iter().map(|d| d.id).collect();
        assert_eq!(unique.len(), store.len());

        // Later ids from the shared generator never collide with the seeds
        let next = ids.next_id();
        assert!(!unique.contains(&next));
    }

    #[test]
    fn test_sample_store_covers_every_category() {
        let mut ids = DishIdGenerator::new();
        let store = sample_store(&mut ids);
        for category in Category::ALL {
            assert!(store.dishes().iter().any(|d| d.category == category));
        }
    }
}
