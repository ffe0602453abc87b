use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// Opaque dish identifier
///
/// Derived from the creation time in milliseconds. Only uniqueness within a
/// running process is guaranteed; callers must not read meaning into the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(u64);

impl DishId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DishId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// One menu item
///
/// Records are immutable once built. `name` and `description` are stored
/// trimmed; `price` keeps the text exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: String,
}
