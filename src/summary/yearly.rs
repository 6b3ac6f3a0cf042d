//! Year-at-a-glance aggregation across stored months.

use serde::{Deserialize, Serialize};

use crate::domain::MonthKey;
use crate::store::MonthMap;

use super::totals::{overall_totals, SpendTotals};

/// Condensed figures for one month of the yearly table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthOverview {
    pub month: MonthKey,
    pub income: f64,
    pub totals: SpendTotals,
}

/// Summarizes every stored month of `year`, in chronological order.
pub fn yearly_overview(months: &MonthMap, year: i32) -> Vec<MonthOverview> {
    months
        .iter()
        .filter(|(key, _)| key.year() == year)
        .map(|(key, snapshot)| MonthOverview {
            month: *key,
            income: snapshot.income,
            totals: overall_totals(snapshot),
        })
        .collect()
}
