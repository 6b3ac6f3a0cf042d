//! Ordered collection of monthly snapshots and every mutation over them.
//!
//! The store is the only writer of snapshot data. Reads hand out shared
//! references; each mutation builds the replacement snapshot via a
//! [`SnapshotPatch`] and swaps it in under its key.

pub mod session;

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::domain::{BudgetItem, ItemUpdate, MonthKey, MonthlyBudget, SnapshotPatch};
use crate::errors::StoreError;

pub use session::{Session, ViewTab};

/// The persisted shape: month key to snapshot, chronologically ordered.
pub type MonthMap = BTreeMap<MonthKey, MonthlyBudget>;

/// Owns all monthly snapshots. An absent key means the month was never
/// initialized, which is distinct from a month of zeroes.
#[derive(Debug, Clone, Default)]
pub struct MonthStore {
    months: MonthMap,
}

impl MonthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_months(months: MonthMap) -> Self {
        Self { months }
    }

    pub fn months(&self) -> &MonthMap {
        &self.months
    }

    pub fn get(&self, key: &MonthKey) -> Option<&MonthlyBudget> {
        self.months.get(key)
    }

    pub fn contains(&self, key: &MonthKey) -> bool {
        self.months.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Creates the snapshot for `key`, blank or carried forward from
    /// `copy_from`. Returns `false` without touching anything when `key` is
    /// already occupied or the source month does not exist.
    ///
    /// Carry-forward copies income, categories, salary slip, and investments,
    /// and keeps every item with its `actual` reset to zero. A blank month
    /// starts from the canonical categories and starter items.
    pub fn init_month(&mut self, key: MonthKey, copy_from: Option<&MonthKey>) -> bool {
        if self.months.contains_key(&key) {
            debug!(%key, "month already initialized, leaving as is");
            return false;
        }
        let snapshot = match copy_from {
            Some(source) => match self.months.get(source) {
                Some(snapshot) => MonthlyBudget::carried_forward(snapshot, key),
                None => {
                    debug!(%key, source = %source, "carry-forward source missing");
                    return false;
                }
            },
            None => MonthlyBudget::blank(key),
        };
        self.months.insert(key, snapshot);
        true
    }

    /// Greatest stored key strictly before `key`, if any.
    pub fn previous_available_month(&self, key: &MonthKey) -> Option<MonthKey> {
        self.months.range(..key).next_back().map(|(key, _)| *key)
    }

    /// Merges `patch` into the snapshot at `key`. Returns `false` when the
    /// month does not exist; patches never create months.
    pub fn apply(&mut self, key: MonthKey, patch: SnapshotPatch) -> bool {
        match self.months.get(&key) {
            Some(snapshot) => {
                let merged = snapshot.merged(patch);
                self.months.insert(key, merged);
                true
            }
            None => false,
        }
    }

    /// Applies a single-field edit to the item with `id`. Unknown ids and
    /// unknown months are a no-op returning `false`.
    pub fn update_item(&mut self, key: MonthKey, id: &str, update: ItemUpdate) -> bool {
        let snapshot = match self.months.get(&key) {
            Some(snapshot) => snapshot,
            None => return false,
        };
        let mut items = snapshot.items.clone();
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => update.apply_to(item),
            None => return false,
        }
        self.apply(key, SnapshotPatch::items(items))
    }

    /// Removes the item with `id`, returning whether anything changed.
    pub fn remove_item(&mut self, key: MonthKey, id: &str) -> bool {
        let snapshot = match self.months.get(&key) {
            Some(snapshot) => snapshot,
            None => return false,
        };
        if snapshot.item(id).is_none() {
            return false;
        }
        let items = snapshot
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.apply(key, SnapshotPatch::items(items))
    }

    /// Appends a new item under an existing category and returns its fresh
    /// id. `None` when the month is missing or `category` is not declared on
    /// the snapshot.
    pub fn add_item(
        &mut self,
        key: MonthKey,
        name: impl Into<String>,
        category: impl Into<String>,
        budget: f64,
        actual: f64,
    ) -> Option<String> {
        let category = category.into();
        let snapshot = self.months.get(&key)?;
        if !snapshot.has_category(&category) {
            debug!(%key, %category, "rejected item for undeclared category");
            return None;
        }
        let id = fresh_item_id(snapshot);
        let mut items = snapshot.items.clone();
        items.push(BudgetItem::new(id.clone(), name, category, budget, actual));
        self.apply(key, SnapshotPatch::items(items));
        Some(id)
    }

    /// Appends a category label. Blank names (after trimming) are rejected;
    /// an exact duplicate is a silent no-op returning `Ok(false)`.
    pub fn add_category(&mut self, key: MonthKey, name: &str) -> Result<bool, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "category name cannot be empty".to_string(),
            ));
        }
        let snapshot = match self.months.get(&key) {
            Some(snapshot) => snapshot,
            None => return Ok(false),
        };
        if snapshot.has_category(name) {
            return Ok(false);
        }
        let mut categories = snapshot.categories.clone();
        categories.push(name.to_string());
        Ok(self.apply(key, SnapshotPatch::categories(categories)))
    }

    /// Removes a category label and every item filed under it, as one swap.
    pub fn remove_category(&mut self, key: MonthKey, name: &str) -> bool {
        let snapshot = match self.months.get(&key) {
            Some(snapshot) => snapshot,
            None => return false,
        };
        if !snapshot.has_category(name) {
            return false;
        }
        let categories = snapshot
            .categories
            .iter()
            .filter(|category| category.as_str() != name)
            .cloned()
            .collect();
        let items = snapshot
            .items
            .iter()
            .filter(|item| item.category != name)
            .cloned()
            .collect();
        let patch = SnapshotPatch {
            categories: Some(categories),
            items: Some(items),
            ..SnapshotPatch::default()
        };
        self.apply(key, patch)
    }

    /// Swaps the whole mapping, e.g. after a remote restore. No merge.
    pub fn replace_all(&mut self, months: MonthMap) {
        self.months = months;
    }
}

/// Next free item id, derived from the creation time like the established
/// `item-<millis>` scheme.
fn fresh_item_id(snapshot: &MonthlyBudget) -> String {
    dedup_item_id(snapshot, format!("item-{}", Utc::now().timestamp_millis()))
}

/// Suffixes `base` until it is unused, so same-millisecond inserts still get
/// unique ids within the snapshot.
fn dedup_item_id(snapshot: &MonthlyBudget, base: String) -> String {
    if snapshot.item(&base).is_none() {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if snapshot.item(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::defaults::{self, SAVINGS_INVESTMENT};

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    fn store_with_blank(month: &str) -> MonthStore {
        let mut store = MonthStore::new();
        assert!(store.init_month(key(month), None));
        store
    }

    #[test]
    fn blank_init_seeds_defaults() {
        let store = store_with_blank("2024-05");
        let snapshot = store.get(&key("2024-05")).unwrap();
        assert_eq!(snapshot.income, 0.0);
        assert_eq!(snapshot.year, "2024");
        assert_eq!(snapshot.categories, defaults::default_categories());
        assert_eq!(snapshot.items.len(), defaults::starter_items().len());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let mut store = store_with_blank("2024-05");
        assert!(store.apply(key("2024-05"), SnapshotPatch::income(9_000.0)));
        assert!(!store.init_month(key("2024-05"), None));
        assert_eq!(store.get(&key("2024-05")).unwrap().income, 9_000.0);
    }

    #[test]
    fn carry_forward_resets_actuals_and_recomputes_year() {
        let mut store = store_with_blank("2024-12");
        let source = key("2024-12");
        store.apply(source, SnapshotPatch::income(7_500.0));
        store.update_item(source, "item-default-1", ItemUpdate::Budget(2_000.0));
        store.update_item(source, "item-default-1", ItemUpdate::Actual(1_800.0));

        assert!(store.init_month(key("2025-01"), Some(&source)));
        let carried = store.get(&key("2025-01")).unwrap();
        assert_eq!(carried.income, 7_500.0);
        assert_eq!(carried.year, "2025");
        let item = carried.item("item-default-1").unwrap();
        assert_eq!(item.budget, 2_000.0);
        assert_eq!(item.actual, 0.0);
    }

    #[test]
    fn carried_categories_are_independent() {
        let mut store = store_with_blank("2024-01");
        let source = key("2024-01");
        assert!(store.init_month(key("2024-02"), Some(&source)));
        assert!(store.add_category(key("2024-02"), "Liburan").unwrap());

        assert!(!store.get(&source).unwrap().has_category("Liburan"));
        assert!(store.get(&key("2024-02")).unwrap().has_category("Liburan"));
    }

    #[test]
    fn carry_forward_needs_an_existing_source() {
        let mut store = MonthStore::new();
        assert!(!store.init_month(key("2024-02"), Some(&key("2024-01"))));
        assert!(store.is_empty());
    }

    #[test]
    fn previous_available_skips_gaps() {
        let mut store = MonthStore::new();
        store.init_month(key("2024-01"), None);
        store.init_month(key("2024-03"), None);
        assert_eq!(
            store.previous_available_month(&key("2024-05")),
            Some(key("2024-03"))
        );
        assert_eq!(store.previous_available_month(&key("2024-01")), None);
    }

    #[test]
    fn patches_never_create_months() {
        let mut store = MonthStore::new();
        assert!(!store.apply(key("2024-05"), SnapshotPatch::income(100.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn update_with_unknown_id_changes_nothing() {
        let mut store = store_with_blank("2024-05");
        let before = store.get(&key("2024-05")).unwrap().clone();
        assert!(!store.update_item(key("2024-05"), "item-nope", ItemUpdate::Budget(5.0)));
        assert_eq!(store.get(&key("2024-05")).unwrap(), &before);
    }

    #[test]
    fn add_item_requires_a_declared_category() {
        let mut store = store_with_blank("2024-05");
        assert!(store
            .add_item(key("2024-05"), "Mystery", "Tidak Ada", 10.0, 0.0)
            .is_none());

        let id = store
            .add_item(key("2024-05"), "Emas", SAVINGS_INVESTMENT, 500.0, 0.0)
            .unwrap();
        let snapshot = store.get(&key("2024-05")).unwrap();
        let item = snapshot.item(&id).unwrap();
        assert_eq!(item.name, "Emas");
        assert_eq!(item.budget, 500.0);
    }

    #[test]
    fn remove_item_drops_exactly_one_line() {
        let mut store = store_with_blank("2024-05");
        let count = store.get(&key("2024-05")).unwrap().items.len();
        assert!(store.remove_item(key("2024-05"), "item-default-2"));
        let snapshot = store.get(&key("2024-05")).unwrap();
        assert_eq!(snapshot.items.len(), count - 1);
        assert!(snapshot.item("item-default-2").is_none());
        assert!(!store.remove_item(key("2024-05"), "item-default-2"));
    }

    #[test]
    fn category_names_are_validated() {
        let mut store = store_with_blank("2024-05");
        assert!(matches!(
            store.add_category(key("2024-05"), "   "),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(store.add_category(key("2024-05"), "Liburan").unwrap());
        assert!(!store.add_category(key("2024-05"), "Liburan").unwrap());
    }

    #[test]
    fn removing_a_category_cascades_to_its_items_only() {
        let mut store = store_with_blank("2024-05");
        store
            .add_item(key("2024-05"), "Emas", SAVINGS_INVESTMENT, 500.0, 100.0)
            .unwrap();
        let kept_before = store
            .get(&key("2024-05"))
            .unwrap()
            .items
            .iter()
            .filter(|item| item.category != SAVINGS_INVESTMENT)
            .count();

        assert!(store.remove_category(key("2024-05"), SAVINGS_INVESTMENT));
        let snapshot = store.get(&key("2024-05")).unwrap();
        assert!(!snapshot.has_category(SAVINGS_INVESTMENT));
        assert!(snapshot
            .items
            .iter()
            .all(|item| item.category != SAVINGS_INVESTMENT));
        assert_eq!(snapshot.items.len(), kept_before);
    }

    #[test]
    fn colliding_ids_get_a_suffix() {
        let mut snapshot = MonthlyBudget::blank(key("2024-05"));
        let base = "item-1700000000000".to_string();
        assert_eq!(dedup_item_id(&snapshot, base.clone()), base);

        snapshot
            .items
            .push(BudgetItem::new(&base, "One", "Kebutuhan Pokok", 0.0, 0.0));
        assert_eq!(dedup_item_id(&snapshot, base.clone()), format!("{base}-1"));

        snapshot.items.push(BudgetItem::new(
            format!("{base}-1"),
            "Two",
            "Kebutuhan Pokok",
            0.0,
            0.0,
        ));
        assert_eq!(dedup_item_id(&snapshot, base.clone()), format!("{base}-2"));
    }
}
