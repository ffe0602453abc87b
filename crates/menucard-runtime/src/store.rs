use menucard_types::DishRecord;
use tracing::debug;

/// Append-only, insertion-ordered list of dishes
///
/// Lives for the whole process and is never persisted. `revision` changes on
/// every append so views can tell that the listing needs a redraw.
#[derive(Debug, Default)]
pub struct MenuStore {
    dishes: Vec<DishRecord>,
    revision: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: DishRecord) {
        debug!(
            event = "runtime.store.appended",
            id = %record.id,
            category = %record.category,
            count = self.dishes.len() + 1
        );
        self.dishes.push(record);
        self.revision += 1;
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Extend<DishRecord> for MenuStore {
    fn extend<I: IntoIterator<Item = DishRecord>>(&mut self, iter: I) {
        for record in iter {
            self.append(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menucard_types::{Category, DishId};

    fn dish(id: u64, name: &str) -> DishRecord {
        DishRecord {
            id: DishId::new(id),
            name: name.to_string(),
            description: String::new(),
            category: Category::Mains,
            price: "10".to_string(),
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MenuStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_append_preserves_order_and_bumps_revision() {
        let mut store = MenuStore::new();
        store.append(dish(1, "Soup"));
        store.append(dish(2, "Steak"));

        let names: Vec<_> = store.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Soup", "Steak"]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_extend_appends_each_record() {
        let mut store = MenuStore::new();
        store.extend([dish(1, "a"), dish(2, "b"), dish(3, "c")]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 3);
    }
}
