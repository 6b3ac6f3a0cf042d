//! The persisted JSON must stay readable by (and byte-compatible with) the
//! blobs the shipped app wrote, camelCase sub-records included.

use arthaku_core::domain::{
    BudgetItem, InvestmentDetails, MonthKey, MonthlyBudget, SalaryDetails,
};
use arthaku_core::store::MonthMap;
use serde_json::json;

fn populated_snapshot() -> MonthlyBudget {
    MonthlyBudget {
        income: 12_000_000.0,
        items: vec![BudgetItem::new(
            "item-1700000000000",
            "Belanja Bulanan",
            "Kebutuhan Pokok",
            2_000_000.0,
            1_850_000.0,
        )],
        categories: vec!["Kebutuhan Pokok".into()],
        year: "2024".into(),
        salary_slip: SalaryDetails {
            basic_salary: 9_000_000.0,
            shift_allowance: 500_000.0,
            housing_allowance: 750_000.0,
            ot_hours_str: "12".into(),
            tax_rate_str: "5".into(),
            other_deductions: 250_000.0,
            bonus_multiplier_str: "1.5".into(),
        },
        investments: InvestmentDetails {
            education_fund: 1_000_000.0,
            retirement_fund: 2_000_000.0,
            general_savings: 3_000_000.0,
            education_target: 10_000_000.0,
            retirement_target: 50_000_000.0,
            savings_target: 20_000_000.0,
        },
    }
}

#[test]
fn snapshots_serialize_with_the_established_field_names() {
    let value = serde_json::to_value(populated_snapshot()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "income": 12_000_000.0,
            "items": [{
                "id": "item-1700000000000",
                "name": "Belanja Bulanan",
                "category": "Kebutuhan Pokok",
                "budget": 2_000_000.0,
                "actual": 1_850_000.0,
            }],
            "categories": ["Kebutuhan Pokok"],
            "year": "2024",
            "salarySlip": {
                "basicSalary": 9_000_000.0,
                "shiftAllowance": 500_000.0,
                "housingAllowance": 750_000.0,
                "otHoursStr": "12",
                "taxRateStr": "5",
                "otherDeductions": 250_000.0,
                "bonusMultiplierStr": "1.5",
            },
            "investments": {
                "educationFund": 1_000_000.0,
                "retirementFund": 2_000_000.0,
                "generalSavings": 3_000_000.0,
                "educationTarget": 10_000_000.0,
                "retirementTarget": 50_000_000.0,
                "savingsTarget": 20_000_000.0,
            },
        })
    );
}

#[test]
fn blobs_without_the_optional_records_get_defaults() {
    // Months written before the salary and investment views existed.
    let raw = r#"{
        "income": 4500000,
        "items": [],
        "categories": ["Kebutuhan Pokok"],
        "year": "2022"
    }"#;

    let snapshot: MonthlyBudget = serde_json::from_str(raw).expect("parse legacy blob");
    assert_eq!(snapshot.income, 4_500_000.0);
    assert_eq!(snapshot.salary_slip, SalaryDetails::default());
    assert_eq!(snapshot.salary_slip.tax_rate_str, "10");
    assert_eq!(snapshot.investments, InvestmentDetails::default());
}

#[test]
fn month_mappings_roundtrip_with_string_keys() {
    let key: MonthKey = "2024-05".parse().expect("key");
    let mut months = MonthMap::new();
    months.insert(key, populated_snapshot());

    let raw = serde_json::to_string(&months).expect("serialize mapping");
    let parsed: MonthMap = serde_json::from_str(&raw).expect("parse mapping");
    assert_eq!(parsed, months);
    assert!(raw.starts_with("{\"2024-05\":"));
}

#[test]
fn malformed_month_keys_fail_the_whole_mapping() {
    let raw = r#"{ "2024-5": { "income": 0, "items": [], "categories": [], "year": "2024" } }"#;
    assert!(serde_json::from_str::<MonthMap>(raw).is_err());
}
