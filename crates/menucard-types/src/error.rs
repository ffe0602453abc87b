use serde::Serialize;
use std::fmt;

/// Form field that must be filled before a dish can be saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequiredField {
    Name,
    Price,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "Dish Name"),
            RequiredField::Price => write!(f, "Price"),
        }
    }
}

/// Save was attempted with a blank name and/or price
///
/// Always recoverable: the form keeps its contents so the user can fix them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all required fields.")]
pub struct IncompleteSubmission {
    pub missing: Vec<RequiredField>,
}
