//! Canonical categories and the starter item list for blank months.
//!
//! Labels are kept verbatim from the shipped app, which presents them in
//! Indonesian; snapshots store them as plain strings.

use once_cell::sync::Lazy;

use super::item::BudgetItem;

/// Day-to-day essentials.
pub const FIXED_EXPENSES: &str = "Kebutuhan Pokok";
/// Installments and debt service.
pub const DEBT_INSTALLMENTS: &str = "Cicilan / Hutang";
/// Savings and investment contributions.
pub const SAVINGS_INVESTMENT: &str = "Tabungan / Investasi";
/// Everything else.
pub const MISCELLANEOUS: &str = "Kebutuhan Lain-lain";

/// The four canonical categories every blank month starts with.
pub const DEFAULT_CATEGORIES: [&str; 4] = [
    FIXED_EXPENSES,
    DEBT_INSTALLMENTS,
    SAVINGS_INVESTMENT,
    MISCELLANEOUS,
];

/// The canonical category list as owned strings, in display order.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}

static STARTER_ITEMS: Lazy<Vec<BudgetItem>> = Lazy::new(|| {
    vec![
        BudgetItem::new("item-default-1", "Belanja Bulanan", FIXED_EXPENSES, 0.0, 0.0),
        BudgetItem::new("item-default-2", "Listrik & Air", FIXED_EXPENSES, 0.0, 0.0),
        BudgetItem::new("item-default-3", "Internet & Pulsa", FIXED_EXPENSES, 0.0, 0.0),
        BudgetItem::new("item-default-4", "Transportasi", FIXED_EXPENSES, 0.0, 0.0),
        BudgetItem::new("item-default-5", "Cicilan KPR", DEBT_INSTALLMENTS, 0.0, 0.0),
        BudgetItem::new("item-default-6", "Tabungan Rutin", SAVINGS_INVESTMENT, 0.0, 0.0),
        BudgetItem::new("item-default-7", "Dana Darurat", SAVINGS_INVESTMENT, 0.0, 0.0),
        BudgetItem::new("item-default-8", "Hiburan", MISCELLANEOUS, 0.0, 0.0),
    ]
});

/// Fresh copies of the starter items used by blank-month initialization.
pub fn starter_items() -> Vec<BudgetItem> {
    STARTER_ITEMS.clone()
}
