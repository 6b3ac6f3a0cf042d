//! Month keys: the `"YYYY-MM"` identifiers addressing one monthly snapshot.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Identifies one monthly snapshot.
///
/// Ordering matches the lexicographic order of the zero-padded `"YYYY-MM"`
/// form, so chronological comparisons work on either representation. The key
/// serializes as the bare string to keep persisted mapping keys readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(0..=9999).contains(&year) {
            return Err(MonthKeyError::YearOutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange);
        }
        Ok(Self { year, month })
    }

    /// The key for the current calendar month on the local clock.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The 4-digit year portion, as recorded on a snapshot.
    pub fn year_string(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Returns the key `steps` months away, normalized by calendar rollover
    /// (January minus one month is December of the previous year).
    pub fn advanced(&self, steps: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + steps;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value.split_once('-').ok_or(MonthKeyError::InvalidFormat)?;
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(MonthKeyError::InvalidFormat);
        }
        let year: i32 = year.parse().map_err(|_| MonthKeyError::InvalidFormat)?;
        let month: u32 = month.parse().map_err(|_| MonthKeyError::InvalidFormat)?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

fn all_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Errors that can occur when constructing [`MonthKey`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthKeyError {
    InvalidFormat,
    MonthOutOfRange,
    YearOutOfRange,
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MonthKeyError::InvalidFormat => "month key must look like \"YYYY-MM\"",
            MonthKeyError::MonthOutOfRange => "month component must be between 01 and 12",
            MonthKeyError::YearOutOfRange => "year component must fit four digits",
        };
        f.write_str(message)
    }
}

impl std::error::Error for MonthKeyError {}
