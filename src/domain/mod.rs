//! Entity model: snapshots, items, salary and investment records, month keys.

pub mod defaults;
pub mod investment;
pub mod item;
pub mod month_key;
pub mod salary;
pub mod snapshot;

pub use investment::InvestmentDetails;
pub use item::{BudgetItem, ItemUpdate};
pub use month_key::{MonthKey, MonthKeyError};
pub use salary::SalaryDetails;
pub use snapshot::{MonthlyBudget, SnapshotPatch};
