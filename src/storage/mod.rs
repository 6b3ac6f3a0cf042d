pub mod json_backend;

use crate::domain::MonthKey;
use crate::errors::StoreError;
use crate::store::MonthMap;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends for the month mapping and the
/// remembered selection.
///
/// `load` returns `Ok(None)` when nothing usable is stored, so a first run
/// and an unreadable blob both start the tracker empty instead of failing.
pub trait StoragePort: Send + Sync {
    fn load(&self) -> Result<Option<MonthMap>>;
    fn save(&self, months: &MonthMap) -> Result<()>;
    fn load_selection(&self) -> Result<Option<MonthKey>>;
    fn save_selection(&self, key: &MonthKey) -> Result<()>;
}

/// Contract for an external backup target (a cloud drive, a sync service).
/// The crate ships no implementation; frontends supply their own.
pub trait RemoteBackup {
    fn upload(&self, months: &MonthMap) -> Result<()>;
    fn download(&self) -> Result<Option<MonthMap>>;
}

pub use json_backend::JsonStorage;
