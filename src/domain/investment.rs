//! Investment balances and targets carried on a monthly snapshot.

use serde::{Deserialize, Serialize};

/// Current balances and targets for the three tracked funds.
///
/// Serialized in camelCase to match the established blob layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentDetails {
    pub education_fund: f64,
    pub retirement_fund: f64,
    pub general_savings: f64,
    pub education_target: f64,
    pub retirement_target: f64,
    pub savings_target: f64,
}

impl InvestmentDetails {
    /// Sum of the three fund balances.
    pub fn total_balance(&self) -> f64 {
        self.education_fund + self.retirement_fund + self.general_savings
    }

    /// Sum of the three fund targets.
    pub fn total_target(&self) -> f64 {
        self.education_target + self.retirement_target + self.savings_target
    }

    /// Education fund progress as a fraction of its target.
    pub fn education_progress(&self) -> Option<f64> {
        progress(self.education_fund, self.education_target)
    }

    /// Retirement fund progress as a fraction of its target.
    pub fn retirement_progress(&self) -> Option<f64> {
        progress(self.retirement_fund, self.retirement_target)
    }

    /// General savings progress as a fraction of its target.
    pub fn savings_progress(&self) -> Option<f64> {
        progress(self.general_savings, self.savings_target)
    }
}

fn progress(balance: f64, target: f64) -> Option<f64> {
    if target > 0.0 {
        Some(balance / target)
    } else {
        None
    }
}
