use serde::Serialize;

/// Listing page ("View Menu")
#[derive(Debug, Clone, Serialize)]
pub struct MenuListViewModel {
    pub title: String,
    pub total_count: usize,
    pub currency_label: String,
    pub dishes: Vec<DishCardViewModel>,
    /// Shown instead of the list when there are no dishes
    pub empty_message: Option<String>,
    /// Store revision this snapshot was taken at
    pub revision: u64,
}

/// Single dish card
#[derive(Debug, Clone, Serialize)]
pub struct DishCardViewModel {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
}
