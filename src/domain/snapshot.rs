//! The monthly snapshot: the complete financial state for a single month.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::investment::InvestmentDetails;
use super::item::BudgetItem;
use super::month_key::MonthKey;
use super::salary::SalaryDetails;

/// One month of budgeting data.
///
/// Older blobs may omit `salarySlip` or `investments`; both fields fall back
/// to their defaults during deserialization, so nothing downstream has to
/// branch on optionality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonthlyBudget {
    pub income: f64,
    pub items: Vec<BudgetItem>,
    pub categories: Vec<String>,
    pub year: String,
    #[serde(rename = "salarySlip")]
    pub salary_slip: SalaryDetails,
    pub investments: InvestmentDetails,
}

impl MonthlyBudget {
    /// A fresh month: zero income, the starter items, the canonical
    /// categories, and defaulted salary/investment records.
    pub fn blank(key: MonthKey) -> Self {
        Self {
            income: 0.0,
            items: defaults::starter_items(),
            categories: defaults::default_categories(),
            year: key.year_string(),
            salary_slip: SalaryDetails::default(),
            investments: InvestmentDetails::default(),
        }
    }

    /// Carry the plan forward from `source`: income, categories, item
    /// budgets, and the salary/investment records are kept; every item's
    /// `actual` resets to zero and the year is recomputed from `key`.
    pub fn carried_forward(source: &Self, key: MonthKey) -> Self {
        Self {
            income: source.income,
            items: source
                .items
                .iter()
                .map(BudgetItem::with_actual_reset)
                .collect(),
            categories: source.categories.clone(),
            year: key.year_string(),
            salary_slip: source.salary_slip.clone(),
            investments: source.investments.clone(),
        }
    }

    pub fn item(&self, id: &str) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category == name)
    }

    /// Builds the replacement snapshot produced by shallow-merging `patch`
    /// over this one. Fields absent from the patch are carried over.
    pub fn merged(&self, patch: SnapshotPatch) -> Self {
        Self {
            income: patch.income.unwrap_or(self.income),
            items: patch.items.unwrap_or_else(|| self.items.clone()),
            categories: patch.categories.unwrap_or_else(|| self.categories.clone()),
            year: patch.year.unwrap_or_else(|| self.year.clone()),
            salary_slip: patch.salary_slip.unwrap_or_else(|| self.salary_slip.clone()),
            investments: patch.investments.unwrap_or_else(|| self.investments.clone()),
        }
    }
}

/// Field-level overrides for one snapshot; the single mutation vocabulary.
///
/// Every edit, whether to income, items, categories, or the sub-records, is
/// expressed as a patch and applied through the month store.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPatch {
    pub income: Option<f64>,
    pub items: Option<Vec<BudgetItem>>,
    pub categories: Option<Vec<String>>,
    pub year: Option<String>,
    pub salary_slip: Option<SalaryDetails>,
    pub investments: Option<InvestmentDetails>,
}

impl SnapshotPatch {
    pub fn income(amount: f64) -> Self {
        Self {
            income: Some(amount),
            ..Self::default()
        }
    }

    pub fn items(items: Vec<BudgetItem>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn categories(categories: Vec<String>) -> Self {
        Self {
            categories: Some(categories),
            ..Self::default()
        }
    }

    pub fn salary_slip(details: SalaryDetails) -> Self {
        Self {
            salary_slip: Some(details),
            ..Self::default()
        }
    }

    pub fn investments(details: InvestmentDetails) -> Self {
        Self {
            investments: Some(details),
            ..Self::default()
        }
    }
}
