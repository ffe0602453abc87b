use menucard_types::IncompleteSubmission;

/// Outcome of a Save that the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DishAdded,
    Incomplete(IncompleteSubmission),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::DishAdded => "Dish added successfully!".to_string(),
            Notice::Incomplete(err) => err.to_string(),
        }
    }
}
