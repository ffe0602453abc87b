use serde::Serialize;

use super::{Category, DishId, DishRecord};
use crate::error::{IncompleteSubmission, RequiredField};

/// In-progress form input for a new dish
///
/// `Default` is the cleared form: empty text fields and the first category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: String,
}

impl DishDraft {
    /// Check the required fields, returning the normalized parts on success.
    ///
    /// Name and price must be non-empty after trimming. The draft itself is
    /// left untouched either way.
    pub fn validate(&self) -> Result<ValidatedDish, IncompleteSubmission> {
        let name = self.name.trim();
        let price = self.price.trim();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if price.is_empty() {
            missing.push(RequiredField::Price);
        }
        if !missing.is_empty() {
            return Err(IncompleteSubmission { missing });
        }

        Ok(ValidatedDish {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            price: self.price.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

/// Draft that passed validation and only lacks an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDish {
    name: String,
    description: String,
    category: Category,
    price: String,
}

impl ValidatedDish {
    pub fn into_record(self, id: DishId) -> DishRecord {
        DishRecord {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str) -> DishDraft {
        DishDraft {
            name: name.to_string(),
            price: price.to_string(),
            ..DishDraft::default()
        }
    }

    #[test]
    fn test_default_draft_is_cleared() {
        let d = DishDraft::default();
        assert!(d.is_cleared());
        assert_eq!(d.category, Category::Starters);
    }

    #[test]
    fn test_validate_trims_name_and_description_but_keeps_raw_price() {
        let d = DishDraft {
            name: "  Grilled Salmon ".to_string(),
            description: " Pan-seared salmon\n".to_string(),
            category: Category::Mains,
            price: " 185 ".to_string(),
        };

        let record = d.validate().unwrap().into_record(DishId::new(7));
        assert_eq!(record.id, DishId::new(7));
        assert_eq!(record.name, "Grilled Salmon");
        assert_eq!(record.description, "Pan-seared salmon");
        assert_eq!(record.category, Category::Mains);
        assert_eq!(record.price, " 185 ");
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let err = draft("  ", "50").validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Name]);
    }

    #[test]
    fn test_both_fields_missing_are_reported_in_order() {
        let err = draft("", " \t").validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Name, RequiredField::Price]);
    }

    #[test]
    fn test_empty_description_is_allowed() {
        assert!(draft("Lemonade", "25").validate().is_ok());
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut d = DishDraft {
            name: "x".into(),
            description: "y".into(),
            category: Category::Drinks,
            price: "1".into(),
        };
        d.clear();
        assert!(d.is_cleared());
    }
}
