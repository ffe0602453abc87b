use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu section a dish belongs to
///
/// The set is closed: every dish is in exactly one of these four sections,
/// and the first variant is the default for a fresh form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Dessert,
    Drinks,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Starters,
        Category::Mains,
        Category::Dessert,
        Category::Drinks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Dessert => "Dessert",
            Category::Drinks => "Drinks",
        }
    }

    /// Position within [`Category::ALL`]
    pub fn index(self) -> usize {
        match self {
            Category::Starters => 0,
            Category::Mains => 1,
            Category::Dessert => 2,
            Category::Drinks => 3,
        }
    }

    /// Category at `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next category, wrapping from the last back to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping from the first to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: Starters, Mains, Dessert, Drinks)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
