//! Facade that coordinates month data, session state, and persistence.

use tracing::warn;

use crate::domain::{
    InvestmentDetails, ItemUpdate, MonthKey, MonthlyBudget, SalaryDetails, SnapshotPatch,
};
use crate::errors::StoreError;
use crate::storage::{RemoteBackup, StoragePort};
use crate::store::{MonthMap, MonthStore, Session, ViewTab};
use crate::summary::{
    overall_totals, overspend_alerts, yearly_overview, MonthOverview, OverspendAlert, SpendTotals,
};

/// One tracker per running frontend: owns the store, the ephemeral session,
/// and the injected storage port.
///
/// Every mutation writes through to storage fire-and-forget: a failed save is
/// logged and the in-memory state stays authoritative for the session.
pub struct FinanceTracker {
    store: MonthStore,
    session: Session,
    storage: Box<dyn StoragePort>,
}

impl FinanceTracker {
    /// Loads persisted months and the remembered selection through `storage`.
    /// Nothing stored (or nothing readable) starts an empty tracker pointed
    /// at the current calendar month.
    pub fn new(storage: Box<dyn StoragePort>) -> Self {
        let months = match storage.load() {
            Ok(Some(months)) => months,
            Ok(None) => MonthMap::new(),
            Err(error) => {
                warn!(%error, "could not load persisted months, starting empty");
                MonthMap::new()
            }
        };
        let selected = match storage.load_selection() {
            Ok(Some(key)) => key,
            Ok(None) => MonthKey::current(),
            Err(error) => {
                warn!(%error, "could not load remembered selection, using current month");
                MonthKey::current()
            }
        };
        Self {
            store: MonthStore::from_months(months),
            session: Session::new(selected),
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StoragePort {
        self.storage.as_ref()
    }

    pub fn months(&self) -> &MonthMap {
        self.store.months()
    }

    pub fn selected_month(&self) -> MonthKey {
        self.session.selected()
    }

    /// Snapshot under the current selection, if that month was initialized.
    pub fn current(&self) -> Option<&MonthlyBudget> {
        self.store.get(&self.session.selected())
    }

    /// Moves the selection, clearing dismissed alerts, and remembers it.
    pub fn select_month(&mut self, key: MonthKey) {
        self.session.select(key);
        if let Err(error) = self.storage.save_selection(&key) {
            warn!(%error, "could not remember month selection");
        }
    }

    /// Steps the selection by whole months and returns the new key.
    pub fn navigate(&mut self, direction: i32) -> MonthKey {
        let next = self.session.selected().advanced(direction);
        self.select_month(next);
        next
    }

    pub fn previous_available_month(&self) -> Option<MonthKey> {
        self.store.previous_available_month(&self.session.selected())
    }

    /// Initializes the selected month, blank or carried forward. Alerts
    /// dismissed against the empty view are dropped so the fresh data is
    /// evaluated cleanly.
    pub fn init_current_month(&mut self, copy_from: Option<MonthKey>) -> bool {
        let created = self
            .store
            .init_month(self.session.selected(), copy_from.as_ref());
        if created {
            self.session.reset_dismissed();
            self.persist();
        }
        created
    }

    pub fn set_income(&mut self, amount: f64) -> bool {
        self.apply_to_selected(SnapshotPatch::income(amount))
    }

    pub fn set_salary_slip(&mut self, details: SalaryDetails) -> bool {
        self.apply_to_selected(SnapshotPatch::salary_slip(details))
    }

    pub fn set_investments(&mut self, details: InvestmentDetails) -> bool {
        self.apply_to_selected(SnapshotPatch::investments(details))
    }

    pub fn update_item(&mut self, id: &str, update: ItemUpdate) -> bool {
        let changed = self.store.update_item(self.session.selected(), id, update);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let changed = self.store.remove_item(self.session.selected(), id);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        budget: f64,
        actual: f64,
    ) -> Option<String> {
        let id = self
            .store
            .add_item(self.session.selected(), name, category, budget, actual);
        if id.is_some() {
            self.persist();
        }
        id
    }

    pub fn add_category(&mut self, name: &str) -> Result<bool, StoreError> {
        let added = self.store.add_category(self.session.selected(), name)?;
        if added {
            self.persist();
        }
        Ok(added)
    }

    pub fn remove_category(&mut self, name: &str) -> bool {
        let removed = self.store.remove_category(self.session.selected(), name);
        if removed {
            self.persist();
        }
        removed
    }

    /// Overspend alerts for the selected month, dismissals applied.
    pub fn alerts(&self) -> Vec<OverspendAlert> {
        match self.current() {
            Some(snapshot) => overspend_alerts(snapshot, self.session.dismissed()),
            None => Vec::new(),
        }
    }

    pub fn dismiss_alert(&mut self, category: impl Into<String>) {
        self.session.dismiss(category);
    }

    /// Overall plan and spend for the selected month; zeroes when the month
    /// was never initialized.
    pub fn totals(&self) -> SpendTotals {
        self.current().map(overall_totals).unwrap_or_default()
    }

    /// Month-by-month figures for the selected month's year.
    pub fn yearly_overview(&self) -> Vec<MonthOverview> {
        yearly_overview(self.store.months(), self.session.selected().year())
    }

    pub fn active_tab(&self) -> ViewTab {
        self.session.active_tab()
    }

    pub fn set_active_tab(&mut self, tab: ViewTab) {
        self.session.set_active_tab(tab);
    }

    /// Swaps in a wholly new mapping, e.g. after a remote restore.
    pub fn replace_all(&mut self, months: MonthMap) {
        self.store.replace_all(months);
        self.persist();
    }

    pub fn backup_to(&self, remote: &dyn RemoteBackup) -> Result<(), StoreError> {
        remote.upload(self.store.months())
    }

    /// Pulls the remote mapping and replaces local data with it. `Ok(false)`
    /// when the remote has nothing to restore.
    pub fn restore_from(&mut self, remote: &dyn RemoteBackup) -> Result<bool, StoreError> {
        match remote.download()? {
            Some(months) => {
                self.replace_all(months);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Explicit full save for callers that want the error.
    pub fn save(&self) -> Result<(), StoreError> {
        self.storage.save(self.store.months())
    }

    fn apply_to_selected(&mut self, patch: SnapshotPatch) -> bool {
        let changed = self.store.apply(self.session.selected(), patch);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        if let Err(error) = self.storage.save(self.store.months()) {
            warn!(%error, "could not persist month data");
        }
    }
}
