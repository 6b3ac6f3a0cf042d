//! Derived views over monthly snapshots.
//!
//! Everything here is computed on demand from [`crate::domain::MonthlyBudget`]
//! data; nothing in this module is ever persisted.

pub mod alerts;
pub mod totals;
pub mod yearly;

pub use alerts::{overspend_alerts, AlertSeverity, OverspendAlert, CRITICAL_RATIO};
pub use totals::{category_totals, overall_totals, SpendTotals};
pub use yearly::{yearly_overview, MonthOverview};
