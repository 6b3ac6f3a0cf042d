//! Per-run UI state: the selected month, its dismissed alerts, and the
//! active tab.
//!
//! Nothing here is persisted except the selected month, which the facade
//! writes through the storage port on every change.

use std::collections::HashSet;
use std::fmt;

use crate::domain::MonthKey;

/// The view surfaces a frontend can present, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTab {
    Salary,
    #[default]
    Dashboard,
    Charts,
    Investment,
    Yearly,
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViewTab::Salary => "Slip Gaji",
            ViewTab::Dashboard => "Anggaran",
            ViewTab::Charts => "Grafik",
            ViewTab::Investment => "Investasi",
            ViewTab::Yearly => "Tahunan",
        };
        f.write_str(label)
    }
}

/// Ephemeral session state. Dismissals are scoped to the selected month:
/// changing the selection clears them.
#[derive(Debug, Clone)]
pub struct Session {
    selected: MonthKey,
    dismissed: HashSet<String>,
    active_tab: ViewTab,
}

impl Session {
    pub fn new(selected: MonthKey) -> Self {
        Self {
            selected,
            dismissed: HashSet::new(),
            active_tab: ViewTab::default(),
        }
    }

    pub fn selected(&self) -> MonthKey {
        self.selected
    }

    /// Moves the selection and drops any dismissals made for the old month.
    pub fn select(&mut self, key: MonthKey) {
        self.selected = key;
        self.dismissed.clear();
    }

    pub fn dismiss(&mut self, category: impl Into<String>) {
        self.dismissed.insert(category.into());
    }

    pub fn is_dismissed(&self, category: &str) -> bool {
        self.dismissed.contains(category)
    }

    pub fn dismissed(&self) -> &HashSet<String> {
        &self.dismissed
    }

    pub fn reset_dismissed(&mut self) {
        self.dismissed.clear();
    }

    pub fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: ViewTab) {
        self.active_tab = tab;
    }
}
