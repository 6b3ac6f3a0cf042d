//! Overspend alert derivation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::MonthlyBudget;

use super::totals::category_totals;

/// Spend-to-plan ratio above which an alert escalates to critical.
pub const CRITICAL_RATIO: f64 = 1.2;

/// How urgently an overspent category should be surfaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// One overspent category, ready for the alert banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverspendAlert {
    pub category: String,
    pub ratio: f64,
    pub severity: AlertSeverity,
}

/// Computes overspend alerts for `snapshot`, in category-list order.
///
/// A category alerts only when its spend exceeds a non-zero plan and it has
/// not been dismissed this session. Categories with a zero budget stay
/// silent regardless of spend.
pub fn overspend_alerts(
    snapshot: &MonthlyBudget,
    dismissed: &HashSet<String>,
) -> Vec<OverspendAlert> {
    snapshot
        .categories
        .iter()
        .filter(|category| !dismissed.contains(category.as_str()))
        .filter_map(|category| {
            let totals = category_totals(snapshot, category);
            if !totals.is_overspent() {
                return None;
            }
            let ratio = totals.ratio();
            let severity = if ratio > CRITICAL_RATIO {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            };
            Some(OverspendAlert {
                category: category.clone(),
                ratio,
                severity,
            })
        })
        .collect()
}
