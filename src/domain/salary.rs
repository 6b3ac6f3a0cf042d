//! Salary computation inputs carried on a monthly snapshot.

use serde::{Deserialize, Serialize};

/// Inputs for the salary-slip view.
///
/// The `_str` fields are free text because the UI accepts partial numeric
/// entry; [`SalaryDetails::overtime_hours`] and friends parse them leniently.
/// Field names serialize in camelCase to stay byte-compatible with blobs
/// written by earlier releases of the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryDetails {
    pub basic_salary: f64,
    pub shift_allowance: f64,
    pub housing_allowance: f64,
    pub ot_hours_str: String,
    pub tax_rate_str: String,
    pub other_deductions: f64,
    pub bonus_multiplier_str: String,
}

impl Default for SalaryDetails {
    fn default() -> Self {
        Self {
            basic_salary: 0.0,
            shift_allowance: 0.0,
            housing_allowance: 0.0,
            ot_hours_str: "0".into(),
            tax_rate_str: "10".into(),
            other_deductions: 0.0,
            bonus_multiplier_str: "0".into(),
        }
    }
}

impl SalaryDetails {
    /// Overtime hours parsed from the free-text field.
    pub fn overtime_hours(&self) -> f64 {
        parse_numeric(&self.ot_hours_str)
    }

    /// Tax rate (percent) parsed from the free-text field.
    pub fn tax_rate(&self) -> f64 {
        parse_numeric(&self.tax_rate_str)
    }

    /// Bonus multiplier parsed from the free-text field.
    pub fn bonus_multiplier(&self) -> f64 {
        parse_numeric(&self.bonus_multiplier_str)
    }
}

/// Lenient numeric parse for incremental user entry; anything unparsable
/// (including the empty string) reads as zero.
fn parse_numeric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}
