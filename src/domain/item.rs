//! Domain types for individual budget lines.

use serde::{Deserialize, Serialize};

/// One budget line: a named plan amount and what was actually spent on it.
///
/// `category` must name an entry of the owning snapshot's category list; the
/// store upholds that invariant on every mutation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub budget: f64,
    pub actual: f64,
}

impl BudgetItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        budget: f64,
        actual: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            budget,
            actual,
        }
    }

    /// A copy of this item with `actual` reset, used by carry-forward.
    pub fn with_actual_reset(&self) -> Self {
        Self {
            actual: 0.0,
            ..self.clone()
        }
    }
}

/// A single-field edit applied to the item matching an id.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Budget(f64),
    Actual(f64),
    Name(String),
}

impl ItemUpdate {
    /// Applies the edit in place.
    pub fn apply_to(&self, item: &mut BudgetItem) {
        match self {
            ItemUpdate::Budget(amount) => item.budget = *amount,
            ItemUpdate::Actual(amount) => item.actual = *amount,
            ItemUpdate::Name(name) => item.name = name.clone(),
        }
    }
}
