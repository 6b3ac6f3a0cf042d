//! Planned-versus-actual aggregation over snapshot items.

use serde::{Deserialize, Serialize};

use crate::domain::{BudgetItem, MonthlyBudget};

/// Aggregated plan and spend for a set of items.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendTotals {
    pub budget: f64,
    pub actual: f64,
}

impl SpendTotals {
    pub fn from_items<'a>(items: impl Iterator<Item = &'a BudgetItem>) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.budget += item.budget;
            totals.actual += item.actual;
        }
        totals
    }

    /// Plan still unspent; negative once over budget.
    pub fn remaining(&self) -> f64 {
        self.budget - self.actual
    }

    /// Spend as a fraction of plan; zero when nothing was budgeted.
    pub fn ratio(&self) -> f64 {
        if self.budget > 0.0 {
            self.actual / self.budget
        } else {
            0.0
        }
    }

    /// True when spend exceeds a non-zero plan.
    pub fn is_overspent(&self) -> bool {
        self.actual > self.budget && self.budget > 0.0
    }
}

/// Totals over the items of one category. O(items).
pub fn category_totals(snapshot: &MonthlyBudget, category: &str) -> SpendTotals {
    SpendTotals::from_items(
        snapshot
            .items
            .iter()
            .filter(|item| item.category == category),
    )
}

/// Totals across all items regardless of category.
pub fn overall_totals(snapshot: &MonthlyBudget) -> SpendTotals {
    SpendTotals::from_items(snapshot.items.iter())
}
